use clap::{crate_authors, crate_description, crate_version, Arg, ArgAction, Command};
use pretty_env_logger::env_logger::Builder;
use std::env;
use std::io::Write;
use std::process::exit;

use hysite::common::{require_root, CountryCode};
use hysite::eventlog::EventLog;
use hysite::service::select_site;
use hysite::Config;

fn set_logger_level(b: &mut Builder) {
    let mut b = b;
    if env::var("RUST_LOG").is_err() {
        b = b.filter_level(log::LevelFilter::Info)
    }
    b.init();
}

fn setup_logger() {
    // Adapted from env_logger examples. <3 Systemd support
    match std::env::var("RUST_LOG_STYLE") {
        Ok(s) if s == "SYSTEMD" => {
            let builder = &mut pretty_env_logger::env_logger::builder();
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "<{}>{}: {}",
                    match record.level() {
                        log::Level::Error => 3,
                        log::Level::Warn => 4,
                        log::Level::Info => 6,
                        log::Level::Debug => 7,
                        log::Level::Trace => 7,
                    },
                    record.target(),
                    record.args()
                )
            });
            set_logger_level(builder);
        }
        _ => {
            let builder = &mut pretty_env_logger::formatted_builder();
            set_logger_level(builder);
        }
    };
}

pub(crate) fn main() {
    let cli = Command::new("hysite")
        .about(format!(
            "{}\n{} {}",
            crate_description!(),
            "Configuration is managed using HYSITE_* environment variables.",
            "Meant to be run once a day from cron or a systemd timer.",
        ))
        .arg(
            Arg::new("check")
                .action(ArgAction::SetTrue)
                .short('t')
                .long("test")
                .help("Check the configuration"),
        )
        .arg(
            Arg::new("dry-run")
                .action(ArgAction::SetTrue)
                .long("dry-run")
                .help("Pick a site without writing the config or restarting"),
        )
        .arg(
            Arg::new("country")
                .long("country")
                .value_name("CODE")
                .help("Skip geolocation and use this country code"),
        )
        .version(crate_version!())
        .author(crate_authors!("\n"));

    let args = cli.get_matches();

    setup_logger();

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(err) => {
            println!("{err}");
            exit(2);
        }
    };

    let country = match args.get_one::<String>("country").map(|c| CountryCode::parse(c)) {
        None => None,
        Some(Ok(code)) => Some(code),
        Some(Err(err)) => {
            println!("{err}");
            exit(2);
        }
    };

    if args.get_flag("check") {
        tracing::info!(
            hysteria_config = config.hysteria.config_path.display().to_string(),
            unit = config.systemd.unit.as_str(),
            event_log = config.eventlog.path.display().to_string(),
            "Configuration is valid."
        );
        exit(0);
    }

    if args.get_flag("dry-run") {
        let outcome = select_site(config.locator(country).as_ref());
        println!("Masquerade URL (dry run): {}", outcome.url);
        exit(0);
    }

    if let Err(err) = require_root("rewrite the Hysteria config and restart its service") {
        println!("{err}");
        exit(1);
    }

    let log = match EventLog::bootstrap(&config.eventlog) {
        Ok(log) => log,
        Err(err) => {
            println!("{err}");
            exit(1);
        }
    };

    match config.get_service(log, country).rotate() {
        Ok(outcome) => {
            println!("Masquerade URL: {}", outcome.url);
        }
        Err(err) => {
            tracing::error!(error = err.to_string(), "Rotation failed");
            exit(1);
        }
    }
}
