use clap::Parser;
use parking_scout::adapters::location::{DeniedLocation, FixedLocation};
use parking_scout::config::toml_config::TomlConfig;
use parking_scout::utils::{logger, validation::Validate};
use parking_scout::{
    CliConfig, FinderEngine, ParkingApiClient, ResolutionMode, ResolutionResult,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting parking-scout CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 載入 TOML 配置（旗標優先）
    if let Some(path) = config.config.clone() {
        tracing::info!("📁 Loading configuration from: {}", path);
        match TomlConfig::from_file(&path) {
            Ok(file) => {
                if let Err(e) = file.validate() {
                    tracing::error!("❌ Configuration validation failed: {}", e);
                    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
                    eprintln!("❌ {}", e.user_friendly_message());
                    std::process::exit(1);
                }
                config.merge_toml(&file);
            }
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        }
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let mode = if config.remote {
        tracing::info!("🌐 Resolution delegated to the backend");
        ResolutionMode::Remote
    } else {
        ResolutionMode::Local
    };

    // 創建後端客戶端
    let api = match ParkingApiClient::from_config(&config) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    // 依流程組裝引擎並執行
    let outcome = if config.favourite {
        let Some(user_id) = config.user_id else {
            // validate() 已保證，防禦性收尾
            eprintln!("❌ --favourite requires --user-id");
            std::process::exit(1);
        };
        // 最愛流程不需要定位，掛一個拒絕定位的 provider
        let engine = FinderEngine::new_with_monitoring(DeniedLocation, api, monitor_enabled);
        engine.find_closest_to_favourite(user_id, mode).await
    } else {
        let Some(reference) = config.reference() else {
            eprintln!("❌ --latitude and --longitude are required without --favourite");
            std::process::exit(1);
        };
        let engine =
            FinderEngine::new_with_monitoring(FixedLocation::new(reference), api, monitor_enabled);
        engine.find_closest_spot(mode).await
    };

    match outcome {
        Ok(ResolutionResult::Found(resolution)) => {
            tracing::info!("✅ Resolution completed successfully!");
            println!(
                "✅ Closest free spot: {} (id {})",
                resolution.spot.name, resolution.spot.parking_spot_id
            );
            println!(
                "📍 ({:.6}, {:.6}), {:.0} m away, updated at {}",
                resolution.spot.latitude,
                resolution.spot.longitude,
                resolution.distance_m,
                resolution.spot.updated_at
            );
        }
        Ok(ResolutionResult::NotFound) => {
            // 正常業務結果，不是錯誤
            tracing::info!("🅿️ Resolution completed: no free spot");
            println!("🅿️ No free parking spot found right now, try again later");
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Resolution failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                parking_scout::utils::error::ErrorSeverity::Low => 0,
                parking_scout::utils::error::ErrorSeverity::Medium => 2,
                parking_scout::utils::error::ErrorSeverity::High => 1,
                parking_scout::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
