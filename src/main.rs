use clap::Parser;
use contact_form::utils::{logger, validation::Validate};
use contact_form::{CliConfig, FormSubmissionHandler, HttpContactClient, SubmitEvent, SubmitOutcome};
use std::sync::Arc;
use tokio::sync::Mutex;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting contact-form CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.client_config().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let client = HttpContactClient::from_config(&config)?;
    let view = Arc::new(Mutex::new(cli.form()));
    let handler = FormSubmissionHandler::new(Arc::clone(&view), client)
        .with_messages(config.messages.clone())
        .with_timing(config.timing());
    handler.attach();

    let mut event = SubmitEvent::new();
    let submission = handler.handle_submit(&mut event).await;

    println!("{}", view.lock().await.feedback_html());

    let outcome = if cli.wait {
        let outcome = submission.wait_for_reset().await;
        println!("{}", view.lock().await.feedback_html());
        outcome
    } else {
        submission.into_outcome()
    };

    if let SubmitOutcome::Sent(_) = outcome {
        return Ok(());
    }

    match &outcome {
        SubmitOutcome::Failed(e) => eprintln!("❌ {}", e),
        other => {
            tracing::warn!("Submission was not handled: {:?}", other);
            eprintln!("❌ Submission was not handled: {:?}", other);
        }
    }
    std::process::exit(exit_code(&outcome));
}

/// 0 成功、1 配置錯誤（見上方）、2 提交失敗或未處理
fn exit_code(outcome: &SubmitOutcome) -> i32 {
    match outcome {
        SubmitOutcome::Sent(_) => 0,
        SubmitOutcome::Failed(_) | SubmitOutcome::Busy | SubmitOutcome::Detached => 2,
    }
}
