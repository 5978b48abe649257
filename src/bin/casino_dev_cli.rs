// src/bin/casino_dev_cli.rs
//
// Dev-CLI: играет короткую сессию (кубик, потом карты) с фиксированным seed
// и печатает баланс после каждого раунда. Раунды крутятся по настоящему таймеру.
//
// Аргументы: [seed] [rounds]. Конфигурация — из CASINO_CONFIG (путь к TOML), если задан.

use casino_engine::api::{build_session_view, run_query, Query, QueryResponse};
use casino_engine::config::EngineConfig;
use casino_engine::domain::{GameCatalog, GameKind};
use casino_engine::engine::{EngineError, RoundController};
use casino_engine::infra::RngSeed;
use casino_engine::runtime::{drive_round, DriveOutcome};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);
    let rounds: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(6);

    let config = match load_config() {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("[CLI] {err}");
            std::process::exit(1);
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
    {
        Ok(rt) => rt,
        Err(err) => {
            eprintln!("[CLI] Не удалось поднять tokio runtime: {err}");
            std::process::exit(1);
        }
    };

    println!("=== CASINO DEV CLI (seed={seed}, rounds={rounds}) ===\n");

    let rng = RngSeed::from_u64(seed).derive(0).to_rng();
    let mut controller = match RoundController::new(config, rng) {
        Ok(ctrl) => ctrl,
        Err(err) => {
            eprintln!("[CLI] {err}");
            std::process::exit(1);
        }
    };
    controller.subscribe(|event: &casino_engine::engine::RoundEvent| {
        log::debug!("event #{}: {:?}", event.index, event.kind);
    });

    let catalog = GameCatalog::default();
    if let QueryResponse::Catalog(games) = run_query(&controller, &catalog, Query::Catalog) {
        for g in games {
            println!("  [{}] {} — {}", g.slug, g.title, g.description);
        }
        println!();
    }

    runtime.block_on(async {
        for i in 0..rounds {
            let game = if i < rounds / 2 {
                GameKind::Dice
            } else {
                GameKind::Card
            };
            if let Err(err) = controller.select_game(game) {
                println!("[CLI] select_game: {err}");
                break;
            }

            match controller.play() {
                Ok(round_id) => println!("Раунд {round_id}: {game}, ставка {}", controller.bet()),
                Err(EngineError::InsufficientBalance { .. }) => {
                    if let Some(status) = controller.status() {
                        println!("{}", status.text);
                    }
                    break;
                }
                Err(err) => {
                    println!("[CLI] play: {err}");
                    break;
                }
            }

            // Отмену в CLI не используем: отправитель живёт до конца раунда.
            let (_cancel_tx, cancel_rx) = tokio::sync::watch::channel(false);
            match drive_round(&mut controller, cancel_rx).await {
                Ok(DriveOutcome::Resolved(_)) | Ok(DriveOutcome::Cancelled { .. }) => {}
                Err(err) => {
                    println!("[CLI] drive_round: {err}");
                    break;
                }
            }

            let view = build_session_view(&controller);
            if let Some(status) = &view.status {
                println!("  {}", status.text);
            }
            println!("  баланс: {}\n", view.balance);
        }
    });

    println!("[CLI] Итоговый баланс: {}", controller.balance());
}

fn load_config() -> Result<EngineConfig, String> {
    match std::env::var("CASINO_CONFIG") {
        Ok(path) => {
            let src = std::fs::read_to_string(&path)
                .map_err(|e| format!("Не удалось прочитать {path}: {e}"))?;
            EngineConfig::from_toml_str(&src).map_err(|e| e.to_string())
        }
        Err(_) => Ok(EngineConfig::default()),
    }
}
