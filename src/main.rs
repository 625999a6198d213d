use anyhow::Context;
use clap::Parser;
use scope_registry::utils::{logger, validation::Validate};
use scope_registry::{
    build_authorization_url, parse_callback, parse_service, scopes_for_manage, scopes_for_services,
    services_info, services_markdown, user_service_csv, AuthConfig, CliConfig, Command, Registry,
    ScopeError, ServiceIdentifier,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    match run(config.command) {
        Ok(()) => Ok(()),
        Err(err) => match err.downcast::<ScopeError>() {
            Ok(e) => {
                tracing::error!("{} (Category: {:?})", e, e.category());
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
            Err(other) => Err(other),
        },
    }
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Services { user, csv, json } => {
            let registry = Registry::global();
            if csv {
                let line = if user {
                    user_service_csv()
                } else {
                    let all: Vec<String> = registry
                        .all_services()
                        .iter()
                        .map(ToString::to_string)
                        .collect();
                    all.join(",")
                };
                println!("{}", line);
            } else if json {
                let views: Vec<_> = services_info()
                    .into_iter()
                    .filter(|view| !user || view.available_to_individual_accounts)
                    .collect();
                println!("{}", serde_json::to_string_pretty(&views)?);
            } else {
                let services = if user {
                    registry.user_services()
                } else {
                    registry.all_services()
                };
                for service in services {
                    println!("{}", service);
                }
            }
        }
        Command::Scopes { services, manage } => {
            let services = services
                .iter()
                .map(|raw| parse_service(raw))
                .collect::<Result<Vec<ServiceIdentifier>, _>>()?;
            let scopes = if manage {
                scopes_for_manage(&services)?
            } else {
                scopes_for_services(&services)?
            };
            tracing::info!("Resolved {} scopes for {} services", scopes.len(), services.len());
            println!("{}", scopes.join(" "));
        }
        Command::Docs => {
            print!("{}", services_markdown(&services_info()));
        }
        Command::AuthUrl { config, state } => {
            tracing::info!("📁 Loading configuration from: {}", config.display());
            let auth = AuthConfig::from_file(&config)
                .with_context(|| format!("failed to load config file '{}'", config.display()))?;
            auth.validate()?;
            let url = build_authorization_url(&auth, &state)?;
            println!("{}", url);
        }
        Command::Callback { url } => {
            let params = parse_callback(&url)?;
            println!("code={}", params.code);
            println!("state={}", params.state);
        }
    }

    Ok(())
}
