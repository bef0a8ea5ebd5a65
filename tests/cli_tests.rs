use clap::Parser;
use std::path::PathBuf;
use tailwind_formatter::{Cli, Commands, FormatArgs, LayoutArgs, WrapIndentStyle};

#[test]
fn test_cli_parse_basic() {
    let args = vec![
        "tailwind-formatter-cli",
        "format",
        "-i", "src/**/*.html",
    ];

    let cli = Cli::parse_from(args);

    match cli.command {
        Commands::Format(args) => {
            assert_eq!(args.input, vec!["src/**/*.html"]);
            assert!(args.exclude.is_empty());
            assert!(args.config.is_none());
            assert!(args.layout.max_line_width.is_none());
            assert!(args.layout.wrap_indent.is_none());
            assert!(!args.layout.close_quote_same_line);
            assert!(!args.check);
            assert!(!args.dry_run);
            assert!(!args.verbose);
            assert!(args.report.is_none());
        }
        _ => panic!("Expected Format command"),
    }
}

#[test]
fn test_cli_parse_with_flags() {
    let args = vec![
        "tailwind-formatter-cli",
        "format",
        "-i", "**/*.jsx",
        "-i", "**/*.tsx",
        "-e", "node_modules/**",
        "-c", "formatter.yaml",
        "--max-line-width", "100",
        "--wrap-indent", "extra",
        "--close-quote-same-line",
        "--check",
        "--verbose",
        "-r", "report.json",
        "-j", "4",
    ];

    let cli = Cli::parse_from(args);

    match cli.command {
        Commands::Format(args) => {
            assert_eq!(args.input, vec!["**/*.jsx", "**/*.tsx"]);
            assert_eq!(args.exclude, vec!["node_modules/**"]);
            assert_eq!(args.config, Some(PathBuf::from("formatter.yaml")));
            assert_eq!(args.layout.max_line_width, Some(100));
            assert_eq!(args.layout.wrap_indent, Some(WrapIndentStyle::Extra));
            assert!(args.layout.close_quote_same_line);
            assert!(args.check);
            assert!(args.verbose);
            assert_eq!(args.report, Some(PathBuf::from("report.json")));
            assert_eq!(args.jobs, Some(4));
        }
        _ => panic!("Expected Format command"),
    }
}

#[test]
fn test_cli_rejects_unknown_wrap_indent() {
    let args = vec![
        "tailwind-formatter-cli",
        "format",
        "--wrap-indent", "double",
    ];

    assert!(Cli::try_parse_from(args).is_err());
}

#[test]
fn test_cli_parse_pipe() {
    let cli = Cli::parse_from(vec!["tailwind-formatter-cli", "pipe", "-w", "0"]);

    match cli.command {
        Commands::Pipe(args) => {
            assert_eq!(args.layout.max_line_width, Some(0));
            assert!(args.config.is_none());
        }
        _ => panic!("Expected Pipe command"),
    }
}

#[test]
fn test_cli_parse_pack() {
    let cli = Cli::parse_from(vec![
        "tailwind-formatter-cli",
        "pack",
        "flex p-4 md:p-8",
        "--indent", "4",
        "--wrap-indent", "same",
    ]);

    match cli.command {
        Commands::Pack(args) => {
            assert_eq!(args.classes, "flex p-4 md:p-8");
            assert_eq!(args.indent, 4);
            assert_eq!(args.layout.wrap_indent, Some(WrapIndentStyle::Same));
        }
        _ => panic!("Expected Pack command"),
    }
}

#[test]
fn test_format_args_validate() {
    let mut args = FormatArgs {
        input: vec!["*.html".to_string()],
        exclude: vec![],
        config: None,
        layout: LayoutArgs::default(),
        check: false,
        dry_run: false,
        report: None,
        verbose: false,
        jobs: None,
    };

    assert!(args.validate().is_ok());

    // Check and dry-run are mutually exclusive
    args.check = true;
    args.dry_run = true;
    assert!(args.validate().is_err());
    args.dry_run = false;
    assert!(args.validate().is_ok());
    assert!(args.is_read_only());

    // Zero jobs should fail
    args.jobs = Some(0);
    assert!(args.validate().is_err());

    args.jobs = Some(4);
    assert!(args.validate().is_ok());
}
