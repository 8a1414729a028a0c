// src/update.rs
//
// Settings reducer. Pure apart from the store's own persistence and the
// diagnostic log: everything else it wants done comes back as `Command`s.
//
use crate::guidance;
use crate::logging;
use crate::messages::{Command, Message, ProbeOutcome};
use crate::models::InstalledModel;
use crate::notifications::Notification;
use crate::state::SettingsState;
use crate::status::ConnectionStatus;
use crate::{debug_log, error_log};

pub fn update(state: &mut SettingsState, msg: Message) -> Vec<Command> {
    let mut commands = Vec::new();

    match msg {
        Message::Mounted => {
            sync_recommended_url(state, &mut commands);
            // The client starts out on the localhost default.
            if commands.is_empty() {
                commands.push(Command::SetBaseUrl(state.form.ollama_url.clone()));
            }
        }

        Message::OllamaUrlEdited(url) => {
            // The field is disabled while the URL is managed automatically.
            if state.store.config().auto_detect_enabled {
                debug_log!("Ignoring manual URL edit while auto-detect is on");
                commands.push(Command::Render);
                return commands;
            }

            debug_log!("Updating Ollama URL to: {}", url);
            state.form.ollama_url = url.clone();
            commands.push(Command::SetBaseUrl(url.clone()));
            if let Err(e) = state.store.set_current_url(&url) {
                debug_log!("Current URL kept in memory only: {}", e);
            }
        }

        Message::TunnelUrlEdited(url) => {
            // Rejections are reported to the user by the store itself.
            if let Err(e) = state.store.set_tunnel_url(url.trim()) {
                debug_log!("Tunnel URL not applied: {}", e);
            }
            sync_recommended_url(state, &mut commands);
        }

        Message::AutoDetectToggled(enabled) => {
            if let Err(e) = state.store.set_auto_detect(enabled) {
                debug_log!("Auto-detect change kept in memory only: {}", e);
            }
            sync_recommended_url(state, &mut commands);
        }

        Message::TestConnectionRequested => {
            if state.connection_status.is_testing() {
                return commands;
            }

            state.connection_status = ConnectionStatus::Testing;
            let url = state.form.ollama_url.clone();
            commands.push(Command::Notify(Notification::info(
                "Testing connection...",
                format!("Checking Ollama availability at {}", url),
            )));
            commands.push(Command::ProbeConnection {
                url,
                generation: state.generation,
            });
        }

        Message::ConnectionChecked {
            generation,
            outcome,
        } => {
            if generation != state.generation {
                debug_log!("Discarding probe result from a previous mount");
                return commands;
            }

            state.last_checked = Some(chrono::Local::now());
            match outcome {
                ProbeOutcome::Reachable => {
                    state.connection_status = ConnectionStatus::Connected;
                    commands.push(Command::Notify(Notification::info(
                        "Connection successful",
                        "Ollama is running and accessible",
                    )));
                    commands.push(Command::FetchModels {
                        generation: state.generation,
                    });
                }
                ProbeOutcome::Unreachable => {
                    state.connection_status = ConnectionStatus::Failed;
                    commands.push(Command::Notify(Notification::destructive(
                        "Connection failed",
                        guidance::connection_failed(state.store.context()),
                    )));
                }
                ProbeOutcome::Error(e) => {
                    error_log!("Connection test error: {}", e);
                    state.connection_status = ConnectionStatus::Failed;
                    commands.push(Command::Notify(Notification::destructive(
                        "Connection error",
                        guidance::CONNECTION_ERROR,
                    )));
                }
            }
        }

        Message::ModelsLoaded { generation, models } => {
            if generation != state.generation {
                return commands;
            }
            apply_installed_models(state, &models, &mut commands);
        }

        Message::EmbeddingModelSelected(model) => state.form.embedding_model = model,
        Message::LlmModelSelected(model) => state.form.llm_model = model,

        Message::ChunkSizeEdited(raw) => {
            if let Some(value) = parse_count(&raw) {
                state.form.chunk_size = value;
            }
        }
        Message::ChunkOverlapEdited(raw) => {
            if let Some(value) = parse_count(&raw) {
                state.form.chunk_overlap = value;
            }
        }
        Message::TopKEdited(raw) => {
            if let Some(value) = parse_count(&raw) {
                state.form.top_k = value;
            }
        }

        Message::LoggingToggled(enabled) => {
            state.form.enable_logging = enabled;
            logging::set_verbose(enabled);
        }
        Message::CacheToggled(enabled) => state.form.enable_cache = enabled,
        Message::ToggleLogDrawer => state.logs_open = !state.logs_open,
        Message::ClearLogs => logging::clear(),

        Message::SaveRequested => {
            // Keep the service in sync with what the form shows.
            commands.push(Command::SetBaseUrl(state.form.ollama_url.clone()));
            commands.push(Command::Notify(Notification::info(
                "Settings saved",
                "Your RAG system configuration has been updated",
            )));
            debug_log!(
                "Configuration saved: url={} embedding={} llm={} chunk={}/{} top_k={} environment={}",
                state.form.ollama_url,
                state.form.embedding_model,
                state.form.llm_model,
                state.form.chunk_size,
                state.form.chunk_overlap,
                state.form.top_k,
                state.store.context().label()
            );
        }
    }

    commands.push(Command::Render);
    commands
}

/// Adopt the store's recommendation in the form and the service client.
fn sync_recommended_url(state: &mut SettingsState, commands: &mut Vec<Command>) {
    let recommended = state.store.recommended_url();
    if !recommended.is_empty() && recommended != state.form.ollama_url {
        state.form.ollama_url = recommended.clone();
        commands.push(Command::SetBaseUrl(recommended));
    }
}

fn parse_count(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}

fn apply_installed_models(
    state: &mut SettingsState,
    models: &[InstalledModel],
    commands: &mut Vec<Command>,
) {
    let (embedding, llm): (Vec<&InstalledModel>, Vec<&InstalledModel>) =
        models.iter().partition(|m| m.is_embedding());

    state.embedding_models = merge_choices(
        embedding.iter().map(|m| m.name.clone()).collect(),
        &state.form.embedding_model,
        &state.embedding_models,
    );
    state.llm_models = merge_choices(
        llm.iter().map(|m| m.name.clone()).collect(),
        &state.form.llm_model,
        &state.llm_models,
    );
    state.model_sizes = models.iter().map(|m| (m.name.clone(), m.size)).collect();

    debug_log!(
        "Ollama reports {} embedding and {} LLM models",
        embedding.len(),
        llm.len()
    );

    if !models.iter().any(|m| m.name == state.form.embedding_model) {
        commands.push(Command::Notify(Notification::info(
            "Embedding model not installed",
            guidance::missing_embedding_model(&state.form.embedding_model),
        )));
    }
}

/// Reported names, keeping the current selection selectable. An empty
/// report leaves the existing list alone.
fn merge_choices(reported: Vec<String>, selected: &str, current: &[String]) -> Vec<String> {
    if reported.is_empty() {
        return current.to_vec();
    }
    let mut choices = reported;
    if !choices.iter().any(|name| name == selected) {
        choices.insert(0, selected.to_string());
    }
    choices
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use crate::config_store::ConfigStore;
    use crate::constants::{STORAGE_KEY, TUNNEL_URL_PLACEHOLDER};
    use crate::models::ExecutionContext;
    use crate::notifications::Severity;
    use crate::storage::MemoryStorage;
    use crate::testing::RecordingNotifier;

    fn state_for(context: ExecutionContext, storage: &MemoryStorage) -> (SettingsState, Rc<RecordingNotifier>) {
        let notifier = Rc::new(RecordingNotifier::default());
        let store = ConfigStore::load(Box::new(storage.clone()), notifier.clone(), context);
        (SettingsState::new(store, 7), notifier)
    }

    fn notifications(commands: &[Command]) -> Vec<&Notification> {
        commands
            .iter()
            .filter_map(|c| match c {
                Command::Notify(n) => Some(n),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn mount_adopts_the_recommended_url() {
        let storage = MemoryStorage::new();
        let (mut state, _) = state_for(ExecutionContext::Remote, &storage);

        let commands = update(&mut state, Message::Mounted);

        assert_eq!(state.form.ollama_url, TUNNEL_URL_PLACEHOLDER);
        assert!(commands.contains(&Command::SetBaseUrl(TUNNEL_URL_PLACEHOLDER.into())));
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn mount_points_the_client_at_a_saved_manual_url() {
        let storage = MemoryStorage::with_item(
            STORAGE_KEY,
            r#"{"currentUrl":"http://gpu-box:11434","autoDetectEnabled":false}"#,
        );
        let (mut state, _) = state_for(ExecutionContext::Local, &storage);

        let commands = update(&mut state, Message::Mounted);

        assert_eq!(
            commands,
            vec![
                Command::SetBaseUrl("http://gpu-box:11434".into()),
                Command::Render
            ]
        );
    }

    #[test]
    fn manual_edit_is_ignored_while_auto_detect_is_on() {
        let storage = MemoryStorage::new();
        let (mut state, _) = state_for(ExecutionContext::Local, &storage);

        update(&mut state, Message::OllamaUrlEdited("http://gpu-box:11434".into()));

        assert_eq!(state.form.ollama_url, "http://localhost:11434");
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn manual_edit_updates_form_store_and_client() {
        let storage = MemoryStorage::new();
        let (mut state, _) = state_for(ExecutionContext::Local, &storage);
        update(&mut state, Message::AutoDetectToggled(false));

        let commands = update(&mut state, Message::OllamaUrlEdited("http://gpu-box:11434".into()));

        assert_eq!(state.form.ollama_url, "http://gpu-box:11434");
        assert_eq!(state.store.config().current_url, "http://gpu-box:11434");
        assert!(commands.contains(&Command::SetBaseUrl("http://gpu-box:11434".into())));
    }

    #[test]
    fn accepted_tunnel_follows_into_form_when_remote() {
        let storage = MemoryStorage::new();
        let (mut state, _) = state_for(ExecutionContext::Remote, &storage);
        update(&mut state, Message::Mounted);

        let commands = update(
            &mut state,
            Message::TunnelUrlEdited(" https://abc123.ngrok.io ".into()),
        );

        assert_eq!(state.store.config().tunnel_url, "https://abc123.ngrok.io");
        assert_eq!(state.form.ollama_url, "https://abc123.ngrok.io");
        assert!(commands.contains(&Command::SetBaseUrl("https://abc123.ngrok.io".into())));
    }

    #[test]
    fn rejected_tunnel_changes_nothing() {
        let storage = MemoryStorage::new();
        let (mut state, notifier) = state_for(ExecutionContext::Remote, &storage);
        update(&mut state, Message::Mounted);

        let commands = update(&mut state, Message::TunnelUrlEdited("https://example.com".into()));

        assert_eq!(commands, vec![Command::Render]);
        assert_eq!(state.form.ollama_url, TUNNEL_URL_PLACEHOLDER);
        assert_eq!(storage.item(STORAGE_KEY), None);
        assert_eq!(notifier.sent().len(), 1);
    }

    #[test]
    fn enabling_auto_detect_snaps_the_form() {
        let storage = MemoryStorage::new();
        let (mut state, _) = state_for(ExecutionContext::Local, &storage);
        update(&mut state, Message::AutoDetectToggled(false));
        update(&mut state, Message::OllamaUrlEdited("http://gpu-box:11434".into()));

        let commands = update(&mut state, Message::AutoDetectToggled(true));

        assert_eq!(state.form.ollama_url, "http://localhost:11434");
        assert_eq!(state.store.config().current_url, state.store.recommended_url());
        assert!(commands.contains(&Command::SetBaseUrl("http://localhost:11434".into())));
    }

    #[test]
    fn probe_moves_to_testing_and_blocks_a_second_probe() {
        let storage = MemoryStorage::new();
        let (mut state, _) = state_for(ExecutionContext::Local, &storage);

        let commands = update(&mut state, Message::TestConnectionRequested);
        assert_eq!(state.connection_status, ConnectionStatus::Testing);
        assert!(commands.contains(&Command::ProbeConnection {
            url: "http://localhost:11434".into(),
            generation: 7,
        }));

        let again = update(&mut state, Message::TestConnectionRequested);
        assert!(again.is_empty());
    }

    #[test]
    fn remote_unreachable_probe_points_at_the_tunnel() {
        let storage = MemoryStorage::new();
        let (mut state, _) = state_for(ExecutionContext::Remote, &storage);
        update(&mut state, Message::TestConnectionRequested);

        let commands = update(
            &mut state,
            Message::ConnectionChecked {
                generation: 7,
                outcome: ProbeOutcome::Unreachable,
            },
        );

        assert_eq!(state.connection_status, ConnectionStatus::Failed);
        assert!(state.last_checked.is_some());
        let sent = notifications(&commands);
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].severity, Severity::Destructive);
        assert!(sent[0].description.contains("ngrok tunnel"));
        assert!(!sent[0].description.contains("ollama serve"));
    }

    #[test]
    fn local_unreachable_probe_suggests_ollama_serve() {
        let storage = MemoryStorage::new();
        let (mut state, _) = state_for(ExecutionContext::Local, &storage);
        update(&mut state, Message::TestConnectionRequested);

        let commands = update(
            &mut state,
            Message::ConnectionChecked {
                generation: 7,
                outcome: ProbeOutcome::Unreachable,
            },
        );

        assert!(notifications(&commands)[0].description.contains("ollama serve"));
    }

    #[test]
    fn probe_error_reports_network_issue() {
        let storage = MemoryStorage::new();
        let (mut state, _) = state_for(ExecutionContext::Local, &storage);
        update(&mut state, Message::TestConnectionRequested);

        let commands = update(
            &mut state,
            Message::ConnectionChecked {
                generation: 7,
                outcome: ProbeOutcome::Error("TypeError: Failed to fetch".into()),
            },
        );

        assert_eq!(state.connection_status, ConnectionStatus::Failed);
        assert_eq!(notifications(&commands)[0].title, "Connection error");
    }

    #[test]
    fn reachable_probe_connects_and_fetches_models() {
        let storage = MemoryStorage::new();
        let (mut state, _) = state_for(ExecutionContext::Local, &storage);
        update(&mut state, Message::TestConnectionRequested);

        let commands = update(
            &mut state,
            Message::ConnectionChecked {
                generation: 7,
                outcome: ProbeOutcome::Reachable,
            },
        );

        assert_eq!(state.connection_status, ConnectionStatus::Connected);
        assert!(commands.contains(&Command::FetchModels { generation: 7 }));
    }

    #[test]
    fn stale_probe_result_is_discarded() {
        let storage = MemoryStorage::new();
        let (mut state, _) = state_for(ExecutionContext::Local, &storage);
        update(&mut state, Message::TestConnectionRequested);

        let commands = update(
            &mut state,
            Message::ConnectionChecked {
                generation: 6,
                outcome: ProbeOutcome::Reachable,
            },
        );

        assert!(commands.is_empty());
        assert_eq!(state.connection_status, ConnectionStatus::Testing);
    }

    #[test]
    fn installed_models_replace_the_static_lists() {
        let storage = MemoryStorage::new();
        let (mut state, _) = state_for(ExecutionContext::Local, &storage);
        let models = vec![
            InstalledModel { name: "mistral:latest".into(), size: 4_000_000_000 },
            InstalledModel { name: "nomic-embed-text:latest".into(), size: 274_000_000 },
        ];

        let commands = update(&mut state, Message::ModelsLoaded { generation: 7, models });

        assert_eq!(state.embedding_models, vec!["nomic-embed-text:latest".to_string()]);
        assert_eq!(
            state.llm_models,
            vec!["llama3.2:latest".to_string(), "mistral:latest".to_string()]
        );
        assert!(notifications(&commands).is_empty());
    }

    #[test]
    fn missing_embedding_model_is_pointed_out() {
        let storage = MemoryStorage::new();
        let (mut state, _) = state_for(ExecutionContext::Local, &storage);
        let models = vec![InstalledModel { name: "llama3.2:latest".into(), size: 0 }];

        let commands = update(&mut state, Message::ModelsLoaded { generation: 7, models });

        let sent = notifications(&commands);
        assert_eq!(sent.len(), 1);
        assert!(sent[0].description.contains("ollama pull nomic-embed-text:latest"));
        assert_eq!(state.embedding_models, vec!["nomic-embed-text:latest".to_string()]);
    }

    #[test]
    fn numeric_fields_ignore_unparseable_input() {
        let storage = MemoryStorage::new();
        let (mut state, _) = state_for(ExecutionContext::Local, &storage);

        update(&mut state, Message::ChunkSizeEdited("1024".into()));
        update(&mut state, Message::ChunkOverlapEdited("abc".into()));
        update(&mut state, Message::TopKEdited(" 8 ".into()));

        assert_eq!(state.form.chunk_size, 1024);
        assert_eq!(state.form.chunk_overlap, 50);
        assert_eq!(state.form.top_k, 8);
    }

    #[test]
    fn save_pushes_form_url_and_confirms() {
        let storage = MemoryStorage::new();
        let (mut state, _) = state_for(ExecutionContext::Local, &storage);

        let commands = update(&mut state, Message::SaveRequested);

        assert_eq!(commands[0], Command::SetBaseUrl("http://localhost:11434".into()));
        assert_eq!(notifications(&commands)[0].title, "Settings saved");
    }

    #[test]
    fn merge_keeps_current_list_on_empty_report() {
        let current = vec!["a".to_string()];
        assert_eq!(merge_choices(Vec::new(), "a", &current), current);
        assert_eq!(
            merge_choices(vec!["b".into()], "a", &current),
            vec!["a".to_string(), "b".to_string()]
        );
    }
}
