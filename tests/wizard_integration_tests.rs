//! End-to-end runs of the wizard against scripted prompts and fake
//! collaborators.

mod utils;

use antdg::catalog::OptionCatalog;
use antdg::config::Settings;
use antdg::constants::labels;
use antdg::prompt::{AutomaticPrompter, PromptRecord};
use antdg::watcher::FileArrivalWatcher;
use antdg::wizard::{CancelStep, Collaborators, Outcome, ScaffoldWizard, UnknownReason};
use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;
use tempfile::TempDir;
use utils::{FixedFolder, RecordingLauncher, RecordingNotifier, RecordingOpener};

struct Fixture {
    folder: TempDir,
    settings: Settings,
    catalog: OptionCatalog,
    launcher: RecordingLauncher,
    opener: RecordingOpener,
    notifier: RecordingNotifier,
}

impl Fixture {
    fn new(launcher: RecordingLauncher) -> Self {
        Self {
            folder: TempDir::new().unwrap(),
            settings: Settings::default(),
            catalog: OptionCatalog::builtin(),
            launcher,
            opener: RecordingOpener::default(),
            notifier: RecordingNotifier::default(),
        }
    }

    fn path(&self, relative: &str) -> PathBuf {
        self.folder.path().join(relative)
    }

    fn run(&self, prompts: &AutomaticPrompter, kind: &str, context: Option<&Path>) -> Outcome {
        self.run_with(prompts, kind, context, false)
    }

    fn run_with(
        &self,
        prompts: &AutomaticPrompter,
        kind: &str,
        context: Option<&Path>,
        dry_run: bool,
    ) -> Outcome {
        let folders = FixedFolder(Some(self.folder.path().to_path_buf()));
        let host = Collaborators {
            prompts,
            folders: &folders,
            launcher: &self.launcher,
            opener: &self.opener,
            notifier: &self.notifier,
        };
        let watcher = FileArrivalWatcher::new(3, Duration::from_millis(500))
            .with_delay(|_: Duration| {});
        ScaffoldWizard::new(host, &self.settings, &self.catalog)
            .with_watcher(watcher)
            .with_dry_run(dry_run)
            .run(kind, context)
            .unwrap()
    }
}

#[test_log::test]
fn page_shortcut_yes_launches_and_opens_artifact() {
    let fixture = Fixture::new(RecordingLauncher::creating("src/routers/dash/index.tsx"));
    let prompts = AutomaticPrompter::new()
        .with_text_response("src/routers/dash")
        .with_choice_response(labels::YES);
    let context = fixture.path("src/routers");

    let outcome = fixture.run(&prompts, "page", Some(&context));

    let artifact = fixture.path("src/routers/dash/index.tsx");
    assert_eq!(
        outcome,
        Outcome::Done {
            command: "antd g page dash --path src/routers".into(),
            artifact: artifact.clone(),
        }
    );
    assert_eq!(fixture.launcher.commands(), vec!["antd g page dash --path src/routers"]);
    assert_eq!(fixture.launcher.sent.borrow()[0].0, fixture.folder.path());
    assert_eq!(*fixture.opener.opened.borrow(), vec![artifact]);
    assert_eq!(fixture.notifier.notified.get(), 0);
}

#[test]
fn name_prompt_is_prefilled_with_inferred_path() {
    let fixture = Fixture::new(RecordingLauncher::default());
    let prompts = AutomaticPrompter::new();
    let context = fixture.path("src/routers");

    fixture.run(&prompts, "page", Some(&context));

    match &prompts.transcript()[0] {
        PromptRecord::Text { prompt, prefill, cursor } => {
            assert!(prompt.starts_with("Input the page name."));
            assert_eq!(prefill, "src/routers/");
            assert_eq!(*cursor, "src/routers/".len());
        }
        other => panic!("expected the name prompt, got {other:?}"),
    }
}

#[test]
fn untouched_prefill_is_a_cancellation() {
    let fixture = Fixture::new(RecordingLauncher::default());
    let prompts = AutomaticPrompter::new().with_text_response("src/routers/");
    let context = fixture.path("src/routers");

    let outcome = fixture.run(&prompts, "page", Some(&context));

    assert_eq!(outcome, Outcome::Cancelled(CancelStep::Name));
    assert!(fixture.launcher.commands().is_empty());
    assert_eq!(prompts.transcript().len(), 1);
}

#[test]
fn empty_name_is_a_cancellation() {
    let fixture = Fixture::new(RecordingLauncher::default());
    let prompts = AutomaticPrompter::new().with_text_dismissed();

    let outcome = fixture.run(&prompts, "module", None);

    assert_eq!(outcome, Outcome::Cancelled(CancelStep::Name));
    assert!(fixture.launcher.commands().is_empty());
}

#[test]
fn project_folder_as_name_is_a_cancellation() {
    let fixture = Fixture::new(RecordingLauncher::default());
    let input = format!("{}/", fixture.folder.path().display());
    let prompts = AutomaticPrompter::new().with_text_response(&input);

    let outcome = fixture.run(&prompts, "module", None);

    assert_eq!(outcome, Outcome::Cancelled(CancelStep::Name));
    assert!(fixture.launcher.commands().is_empty());
}

#[test]
fn dot_segments_are_not_names() {
    for input in ["src/.", "src/..", "./"] {
        let fixture = Fixture::new(RecordingLauncher::default());
        let prompts = AutomaticPrompter::new().with_text_response(input);

        let outcome = fixture.run(&prompts, "module", None);

        assert_eq!(outcome, Outcome::Cancelled(CancelStep::Name), "input {input:?}");
        assert!(fixture.launcher.commands().is_empty());
    }
}

#[test]
fn absolute_name_inside_folder_is_made_relative() {
    let fixture = Fixture::new(RecordingLauncher::default());
    let input = fixture.path("src/models/users").display().to_string();
    let prompts = AutomaticPrompter::new().with_text_response(&input);

    let outcome = fixture.run_with(&prompts, "module", None, true);

    assert_eq!(
        outcome,
        Outcome::Previewed { command: "antd g module users --path src/models".into() }
    );
}

#[test]
fn dismissed_folder_pick_asks_nothing() {
    let fixture = Fixture::new(RecordingLauncher::default());
    let prompts = AutomaticPrompter::new().with_text_response("dash");
    let folders = FixedFolder(None);
    let host = Collaborators {
        prompts: &prompts,
        folders: &folders,
        launcher: &fixture.launcher,
        opener: &fixture.opener,
        notifier: &fixture.notifier,
    };

    let outcome =
        ScaffoldWizard::new(host, &fixture.settings, &fixture.catalog).run("page", None).unwrap();

    assert_eq!(outcome, Outcome::Cancelled(CancelStep::FolderPick));
    assert!(prompts.transcript().is_empty());
    assert!(fixture.launcher.commands().is_empty());
}

#[test]
fn module_skips_shortcut_and_options() {
    let fixture = Fixture::new(RecordingLauncher::creating("src/models/users/index.tsx"));
    let prompts = AutomaticPrompter::new().with_text_response("src/models/users");

    let outcome = fixture.run(&prompts, "module", None);

    assert!(matches!(outcome, Outcome::Done { .. }));
    assert_eq!(fixture.launcher.commands(), vec!["antd g module users --path src/models"]);
    let transcript = prompts.transcript();
    assert_eq!(transcript.len(), 1);
    match &transcript[0] {
        PromptRecord::Text { prompt, prefill, .. } => {
            assert_eq!(prompt, "Input the path with module name (eg: src/routers/some-module).");
            assert!(prefill.is_empty());
        }
        other => panic!("expected the name prompt, got {other:?}"),
    }
}

#[test]
fn component_folder_option_renders_bare_flag() {
    let fixture = Fixture::new(RecordingLauncher::creating("src/components/Button/index.tsx"));
    let prompts = AutomaticPrompter::new()
        .with_text_response("src/components/Button")
        .with_choice_response(labels::MORE_OPTIONS)
        .with_multi_choice_response(&["folder"])
        .with_choice_response(labels::CONFIRM);

    let outcome = fixture.run(&prompts, "component", None);

    assert_eq!(
        outcome.command(),
        Some("antd g component Button --path src/components --folder")
    );
    let transcript = prompts.transcript();
    assert_eq!(transcript.len(), 4);
    assert_eq!(
        transcript[3],
        PromptRecord::Choice {
            placeholder: "antd g component Button --path src/components --folder".into(),
            labels: vec![labels::CONFIRM.into(), labels::CANCEL.into()],
        }
    );
}

#[test]
fn page_options_are_resolved_in_catalog_order() {
    let fixture = Fixture::new(RecordingLauncher::default());
    let prompts = AutomaticPrompter::new()
        .with_text_response("src/routers/dash")
        .with_choice_response(labels::MORE_OPTIONS)
        .with_multi_choice_response(&["father", "redirect"])
        .with_text_response("home")
        .with_choice_response(labels::CONFIRM);
    let context = fixture.path("src/routers");

    let outcome = fixture.run(&prompts, "page", Some(&context));

    assert_eq!(
        outcome.command(),
        Some("antd g page dash --path src/routers --redirect --father home")
    );
    match &prompts.transcript()[3] {
        PromptRecord::Text { prompt, .. } => assert_eq!(prompt, "--father: with father route"),
        other => panic!("expected the father prompt, got {other:?}"),
    }
}

#[test]
fn dismissed_text_option_is_skipped_not_fatal() {
    let fixture = Fixture::new(RecordingLauncher::default());
    let prompts = AutomaticPrompter::new()
        .with_text_response("src/routers/dash")
        .with_choice_response(labels::MORE_OPTIONS)
        .with_multi_choice_response(&["redirect", "father"])
        .with_text_dismissed()
        .with_choice_response(labels::CONFIRM);

    let outcome = fixture.run(&prompts, "page", None);

    assert_eq!(outcome.command(), Some("antd g page dash --path src/routers --redirect"));
    assert_eq!(fixture.launcher.commands().len(), 1);
}

#[test]
fn empty_option_selection_still_confirms() {
    let fixture = Fixture::new(RecordingLauncher::default());
    let prompts = AutomaticPrompter::new()
        .with_text_response("dash")
        .with_choice_response(labels::MORE_OPTIONS)
        .with_multi_choice_response(&[])
        .with_choice_response(labels::CONFIRM);

    let outcome = fixture.run(&prompts, "page", None);

    assert_eq!(outcome.command(), Some("antd g page dash"));
}

#[test]
fn dismissed_shortcut_cancels() {
    let fixture = Fixture::new(RecordingLauncher::default());
    let prompts = AutomaticPrompter::new().with_text_response("dash").with_choice_dismissed();

    let outcome = fixture.run(&prompts, "page", None);

    assert_eq!(outcome, Outcome::Cancelled(CancelStep::Shortcut));
    assert!(fixture.launcher.commands().is_empty());
}

#[test]
fn declined_confirmation_cancels() {
    let fixture = Fixture::new(RecordingLauncher::default());
    let prompts = AutomaticPrompter::new()
        .with_text_response("dash")
        .with_choice_response(labels::MORE_OPTIONS)
        .with_multi_choice_response(&["redirect"])
        .with_choice_response(labels::CANCEL);

    let outcome = fixture.run(&prompts, "page", None);

    assert_eq!(outcome, Outcome::Cancelled(CancelStep::Confirmation));
    assert!(fixture.launcher.commands().is_empty());
    assert_eq!(fixture.notifier.notified.get(), 0);
}

#[test]
fn edited_directory_replaces_inferred_path_in_place() {
    let fixture = Fixture::new(RecordingLauncher::default());
    let prompts = AutomaticPrompter::new()
        .with_text_response("src/pages/dash")
        .with_choice_response(labels::YES);
    let context = fixture.path("src/routers");

    let outcome = fixture.run(&prompts, "page", Some(&context));

    assert_eq!(outcome.command(), Some("antd g page dash --path src/pages"));
}

#[test_log::test]
fn missing_artifact_ends_in_unknown_status() {
    let mut fixture = Fixture::new(RecordingLauncher::default());
    fixture.notifier = RecordingNotifier::accepting();
    let prompts = AutomaticPrompter::new().with_text_response("src/routers/dash");
    let probes = Rc::new(Cell::new(0));

    let folders = FixedFolder(Some(fixture.folder.path().to_path_buf()));
    let host = Collaborators {
        prompts: &prompts,
        folders: &folders,
        launcher: &fixture.launcher,
        opener: &fixture.opener,
        notifier: &fixture.notifier,
    };
    let counter = probes.clone();
    let watcher = FileArrivalWatcher::new(10, Duration::from_millis(500))
        .with_probe(move |_: &Path| {
            counter.set(counter.get() + 1);
            false
        })
        .with_delay(|_: Duration| {});
    let outcome = ScaffoldWizard::new(host, &fixture.settings, &fixture.catalog)
        .with_watcher(watcher)
        .run("module", None)
        .unwrap();

    assert_eq!(
        outcome,
        Outcome::UnknownStatus {
            command: "antd g module dash --path src/routers".into(),
            reason: UnknownReason::WatchExhausted,
        }
    );
    assert_eq!(probes.get(), 10);
    assert_eq!(fixture.notifier.messages.borrow()[0], labels::UNKNOWN_STATUS);
    assert_eq!(*fixture.notifier.refreshed.borrow(), vec![fixture.path("src/routers/dash")]);
    assert!(fixture.opener.opened.borrow().is_empty());
}

#[test]
fn declined_refresh_does_not_refresh() {
    let fixture = Fixture::new(RecordingLauncher::default());
    let prompts = AutomaticPrompter::new().with_text_response("dash");

    let outcome = fixture.run(&prompts, "module", None);

    assert!(matches!(
        outcome,
        Outcome::UnknownStatus { reason: UnknownReason::WatchExhausted, .. }
    ));
    assert_eq!(fixture.notifier.notified.get(), 1);
    assert!(fixture.notifier.refreshed.borrow().is_empty());
}

#[test]
fn blank_artifact_template_skips_watching() {
    let mut fixture = Fixture::new(RecordingLauncher::default());
    fixture.settings.artifact = String::new();
    let prompts = AutomaticPrompter::new().with_text_response("dash");

    let outcome = fixture.run(&prompts, "module", None);

    assert_eq!(
        outcome,
        Outcome::UnknownStatus {
            command: "antd g module dash".into(),
            reason: UnknownReason::EmptyExpectedPath,
        }
    );
}

#[test]
fn failed_launch_ends_in_unknown_status() {
    let fixture = Fixture::new(RecordingLauncher::failing());
    let prompts = AutomaticPrompter::new().with_text_response("dash");

    let outcome = fixture.run(&prompts, "module", None);

    assert!(matches!(outcome, Outcome::UnknownStatus { reason: UnknownReason::LaunchFailed, .. }));
    assert_eq!(fixture.notifier.notified.get(), 1);
}

#[test]
fn dry_run_previews_without_launching() {
    let fixture = Fixture::new(RecordingLauncher::default());
    let prompts = AutomaticPrompter::new()
        .with_text_response("src/routers/dash")
        .with_choice_response(labels::YES);

    let outcome = fixture.run_with(&prompts, "page", None, true);

    assert_eq!(
        outcome,
        Outcome::Previewed { command: "antd g page dash --path src/routers".into() }
    );
    assert!(fixture.launcher.commands().is_empty());
    assert_eq!(fixture.notifier.notified.get(), 0);
}

#[test]
fn context_outside_folder_is_ignored() {
    let fixture = Fixture::new(RecordingLauncher::default());
    let prompts = AutomaticPrompter::new().with_text_response("dash");
    let elsewhere = TempDir::new().unwrap();

    let outcome = fixture.run_with(&prompts, "module", Some(elsewhere.path()), true);

    assert_eq!(outcome, Outcome::Previewed { command: "antd g module dash".into() });
    match &prompts.transcript()[0] {
        PromptRecord::Text { prefill, .. } => assert!(prefill.is_empty()),
        other => panic!("expected the name prompt, got {other:?}"),
    }
}

#[test]
fn configured_kinds_and_base_command_are_used() {
    let mut fixture = Fixture::new(RecordingLauncher::default());
    fixture.settings = serde_yaml::from_str(
        r#"
base_command: npx antd g
kinds:
  model:
    - name: namespace
      description: model namespace
      type: text
"#,
    )
    .unwrap();
    fixture.catalog = fixture.settings.catalog();
    let prompts = AutomaticPrompter::new()
        .with_text_response("src/models/user")
        .with_choice_response(labels::MORE_OPTIONS)
        .with_multi_choice_response(&["namespace"])
        .with_text_response("admin")
        .with_choice_response(labels::CONFIRM);

    let outcome = fixture.run_with(&prompts, "model", None, true);

    assert_eq!(
        outcome.command(),
        Some("npx antd g model user --path src/models --namespace admin")
    );
}
