use crate::adapters::InMemoryForm;
use crate::config::ClientConfig;
use crate::core::{FIELD_COMPANY, FIELD_EMAIL, FIELD_NAME, FIELD_PHONE};
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "contact-form")]
#[command(about = "Submit the contact form to the contact API")]
pub struct CliConfig {
    #[arg(long, default_value = "")]
    pub nome: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub telefone: String,

    #[arg(long, default_value = "")]
    pub empresa: String,

    #[arg(long, help = "Override the contact API endpoint")]
    pub endpoint: Option<String>,

    #[arg(long, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Wait for the submit button restore and feedback clear")]
    pub wait: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// 配置檔（或預設值）加上命令列覆寫
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path.display());
                ClientConfig::from_file(path)?
            }
            None => ClientConfig::default(),
        };

        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }

        Ok(config)
    }

    pub fn form(&self) -> InMemoryForm {
        let mut form = InMemoryForm::new();
        form.set_value(FIELD_NAME, self.nome.as_str());
        form.set_value(FIELD_EMAIL, self.email.as_str());
        form.set_value(FIELD_PHONE, self.telefone.as_str());
        form.set_value(FIELD_COMPANY, self.empresa.as_str());
        form
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_ENDPOINT;
    use crate::core::FormView;

    #[test]
    fn test_parse_args_into_form() {
        let cli = CliConfig::parse_from([
            "contact-form",
            "--nome",
            "Ana",
            "--email",
            "ana@example.com",
        ]);

        let form = cli.form();
        assert_eq!(form.field_value(FIELD_NAME), "Ana");
        assert_eq!(form.field_value(FIELD_EMAIL), "ana@example.com");
        assert_eq!(form.field_value(FIELD_PHONE), "");
        assert_eq!(form.field_value(FIELD_COMPANY), "");
    }

    #[test]
    fn test_endpoint_override() {
        let cli = CliConfig::parse_from(["contact-form"]);
        assert_eq!(cli.client_config().unwrap().endpoint, DEFAULT_ENDPOINT);

        let cli = CliConfig::parse_from([
            "contact-form",
            "--endpoint",
            "http://localhost:3000/api/contact",
        ]);
        assert_eq!(
            cli.client_config().unwrap().endpoint,
            "http://localhost:3000/api/contact"
        );
    }
}
