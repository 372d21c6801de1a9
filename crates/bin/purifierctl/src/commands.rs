//! Subcommands: each one drives a use-case and returns its JSON output.

use std::sync::Arc;

use clap::Subcommand;
use serde_json::{Value, json};

use purifier_adapter_registry_json::LoggingDispatcher;
use purifier_app::request::RequestTracker;
use purifier_app::services::card_editor::CardEditor;
use purifier_app::services::card_service::CardService;
use purifier_app::snapshot::RegistrySnapshot;
use purifier_app::view::CardView;
use purifier_domain::candidate::CandidatePolicy;
use purifier_domain::card_config::PurifierConfig;
use purifier_domain::id::{DeviceId, EntityId};

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List candidate purifier devices for the picker.
    Devices,
    /// Print a starter card configuration bound to the first fan.
    Stub,
    /// Print the editor state: config, device picker and visibility switches.
    Editor,
    /// Bind the card to a device.
    SelectDevice { device_id: String },
    /// Show or hide a sensor (`pm25`, `iai`, `humidity`, `temperature`).
    ToggleSensor {
        key: String,
        #[arg(long)]
        hide: bool,
    },
    /// Show or hide a preset mode, by lowercase key.
    TogglePresetMode {
        key: String,
        #[arg(long)]
        hide: bool,
    },
    /// Print the card view.
    View,
    /// Press the power button (dry run).
    Power,
    /// Press a preset-mode button (dry run).
    Preset { mode: String },
    /// Press the child-lock button (dry run).
    ChildLock,
}

/// Result of a command: what to print, and the config to persist if it changed.
#[derive(Debug)]
pub struct Outcome {
    pub output: Value,
    pub updated: Option<PurifierConfig>,
}

impl Outcome {
    fn print(output: Value) -> Self {
        Self {
            output,
            updated: None,
        }
    }

    fn edited(config: &PurifierConfig) -> anyhow::Result<Self> {
        Ok(Self {
            output: serde_json::to_value(config)?,
            updated: Some(config.clone()),
        })
    }
}

/// Run `command` against one snapshot.
///
/// # Errors
///
/// Returns an error when a command targets a card without fan or child lock,
/// or when output cannot be encoded.
pub async fn run(
    command: Command,
    card: PurifierConfig,
    policy: &CandidatePolicy,
    snapshot: &RegistrySnapshot,
) -> anyhow::Result<Outcome> {
    match command {
        Command::Devices => Ok(Outcome::print(devices(policy, snapshot))),
        Command::Stub => {
            let ids: Vec<EntityId> = snapshot
                .entities
                .iter()
                .map(|e| e.entity_id.clone())
                .collect();
            Ok(Outcome::print(serde_json::to_value(PurifierConfig::stub(
                &ids,
            ))?))
        }
        Command::Editor => {
            let editor = CardEditor::open(card, snapshot);
            Ok(Outcome::print(json!({
                "config": editor.config(),
                "card_size": editor.config().card_size(),
                "devices": devices(policy, snapshot),
                "sensors": editor.sensor_options(),
                "preset_modes": editor.preset_mode_options(snapshot),
            })))
        }
        Command::SelectDevice { device_id } => {
            let mut editor = CardEditor::open(card, snapshot);
            Outcome::edited(editor.select_device(DeviceId::new(device_id), snapshot))
        }
        Command::ToggleSensor { key, hide } => {
            let mut editor = CardEditor::open(card, snapshot);
            Outcome::edited(editor.toggle_sensor(&key, !hide))
        }
        Command::TogglePresetMode { key, hide } => {
            let mut editor = CardEditor::open(card, snapshot);
            Outcome::edited(editor.toggle_preset_mode(&key, !hide, snapshot))
        }
        Command::View => {
            let editor = CardEditor::open(card, snapshot);
            let view = CardView::build(editor.config(), snapshot, &RequestTracker::default());
            Ok(Outcome::print(serde_json::to_value(view)?))
        }
        Command::Power => press(Button::Power, card, snapshot).await,
        Command::Preset { mode } => press(Button::Preset(mode), card, snapshot).await,
        Command::ChildLock => press(Button::ChildLock, card, snapshot).await,
    }
}

fn devices(policy: &CandidatePolicy, snapshot: &RegistrySnapshot) -> Value {
    snapshot
        .device_options(policy)
        .into_iter()
        .map(|option| {
            json!({
                "id": option.id,
                "name": option.name,
                "detail": option.detail(),
            })
        })
        .collect()
}

enum Button {
    Power,
    Preset(String),
    ChildLock,
}

async fn press(
    button: Button,
    card: PurifierConfig,
    snapshot: &RegistrySnapshot,
) -> anyhow::Result<Outcome> {
    let editor = CardEditor::open(card, snapshot);
    let config = editor.config();
    let dispatcher = Arc::new(LoggingDispatcher::new());
    let service = CardService::new(Arc::clone(&dispatcher));
    let mut tracker = RequestTracker::default();

    match button {
        Button::Power => service.toggle_power(config, &mut tracker).await?,
        Button::Preset(mode) => service.set_preset_mode(config, &mode, &mut tracker).await?,
        Button::ChildLock => service.toggle_child_lock(config, snapshot).await?,
    }

    let fan = config.primary_entity().and_then(|id| snapshot.entity(id));
    let calls: Vec<Value> = dispatcher
        .calls()
        .iter()
        .map(|call| json!({ "service": call.name(), "data": call.payload() }))
        .collect();
    Ok(Outcome::print(json!({
        "calls": calls,
        "pending": tracker.is_pending(fan),
    })))
}
