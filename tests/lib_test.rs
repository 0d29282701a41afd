//! Library integration tests.

use pyprov::ProvisionError;

#[test]
fn error_types_are_public() {
    let err = ProvisionError::CommandFailed {
        command: "env/bin/python -m pip install -r requirements.txt".into(),
        code: Some(1),
    };
    assert!(err.to_string().contains("requirements.txt"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> pyprov::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use pyprov::cli::{Cli, Commands, LogConfigCommands};
    use clap::Parser;

    let cli = Cli::parse_from(["pyprov", "log-config", "next-file", "--dir", "logs"]);

    if let Some(Commands::LogConfig(LogConfigCommands::NextFile(args))) = cli.command {
        assert_eq!(args.dir, Some(std::path::PathBuf::from("logs")));
    } else {
        panic!("Expected log-config next-file command");
    }
}

#[test]
fn install_flow_is_public() {
    use pyprov::install::{is_affirmative, transition, FlowInput, InstallState};

    assert!(is_affirmative(" Y "));
    assert!(!is_affirmative("yes"));

    let step = transition(
        &InstallState::AwaitInstallConfirm,
        FlowInput::Answer("y".to_string()),
    )
    .unwrap();
    assert_eq!(step.next, InstallState::DetectEnv);
}
