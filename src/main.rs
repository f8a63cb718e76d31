use clap::Parser;
use std::time::Duration;
use swifthaul_client::config::file_config::FileConfig;
use swifthaul_client::core::auth::LOGIN_PAGE;
use swifthaul_client::utils::validation::Validate;
use swifthaul_client::utils::{logger, pricing, validation};
use swifthaul_client::{ApiClient, AuthApi, CliConfig, OrdersApi, SessionStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting swifthaul-client CLI");

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let file_config = match &config.config {
        Some(path) => {
            let loaded = FileConfig::from_file(path).and_then(|c| {
                c.validate()?;
                Ok(c)
            });
            match loaded {
                Ok(c) => Some(c),
                Err(e) => {
                    tracing::error!("❌ Configuration validation failed: {}", e);
                    eprintln!("❌ {}", e);
                    std::process::exit(1);
                }
            }
        }
        None => None,
    };

    let base_url = config
        .base_url
        .clone()
        .or_else(|| file_config.as_ref().map(|c| c.client.base_url.clone()))
        .unwrap_or_else(|| "http://localhost:5000".to_string());
    let timeout = file_config.as_ref().and_then(|c| c.client.timeout_seconds);
    let auth_section = file_config.as_ref().and_then(|c| c.auth.as_ref());
    let email = config
        .email
        .clone()
        .or_else(|| auth_section.and_then(|a| a.email.clone()));
    let password = config
        .password
        .clone()
        .or_else(|| auth_section.and_then(|a| a.password.clone()));

    let draft = config.order_draft();

    if config.estimate_only {
        match validation::validate_order(&draft) {
            Ok(order) => {
                let distance = pricing::haversine_km(
                    order.pickup_lat,
                    order.pickup_lng,
                    order.drop_lat,
                    order.drop_lng,
                );
                let fare = pricing::compute_fare(distance, order.weight_kg);
                println!("📦 {} -> {}", order.pickup_address, order.drop_address);
                println!("📏 Estimated distance: {:.2} km", distance);
                println!(
                    "💰 Estimated fare: ₹{:.2} (driver ₹{:.2}, commission ₹{:.2})",
                    fare.total, fare.driver_share, fare.commission
                );
                return Ok(());
            }
            Err(e) => {
                tracing::error!("❌ Order validation failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        }
    }

    tracing::debug!("Using API at {}", base_url);

    let session = SessionStore::new();
    let client = match timeout {
        Some(secs) => {
            ApiClient::with_timeout(&base_url, session.clone(), Duration::from_secs(secs))
        }
        None => ApiClient::new(&base_url, session.clone()),
    };
    let client = match client {
        Ok(client) => client.on_unauthorized(|| {
            eprintln!("❌ Session expired. Please login again at {}", LOGIN_PAGE);
        }),
        Err(e) => {
            tracing::error!("❌ Failed to build API client: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if let Some(token) = &config.token {
        session.set_token(token.clone());
    } else if let (Some(email), Some(password)) = (&email, &password) {
        let auth = AuthApi::new(client.clone());
        match auth.login(email, password).await {
            Ok(user) => println!("🔑 Logged in as {}", user.name),
            Err(e) => {
                tracing::error!("❌ Login failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        }
    }

    let orders = OrdersApi::new(client);
    match orders.create_order(&draft).await {
        Ok(confirmation) => {
            tracing::info!("✅ Order created successfully");
            println!(
                "✅ Order created successfully! Order ID: {}, Fare: ₹{:.2}",
                confirmation.order_id, confirmation.fare_total
            );
            if let Some(distance) = confirmation.distance_km {
                println!("📏 Distance: {:.2} km", distance);
            }
        }
        Err(e) => {
            tracing::error!("❌ Order creation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
