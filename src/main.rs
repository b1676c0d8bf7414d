use clap::Parser;
use confessor::application::{ProfileService, ReportService, SessionService};
use confessor::cli::{format_question_list, Cli, Commands};
use confessor::domain::Locale;
use confessor::error::ConfessorError;
use confessor::infrastructure::{
    init_file_logging, ConfigStore, MessageKind, Presenter, RecordStore, SqliteRecordStore,
    TerminalPresenter, TerminalPrompter, Workspace,
};
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();
    let locale = Locale::from_code(cli.command.lang());

    let result = run(cli, locale);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            let kind = if e.is_recoverable() {
                info!("{}", e);
                MessageKind::Warning
            } else {
                error!("{}", e);
                MessageKind::Error
            };
            // Nothing left to report to if stderr itself is gone
            let _ = TerminalPresenter::stderr().message(kind, &e.localized_message(locale));
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli, locale: Locale) -> Result<(), ConfessorError> {
    let workspace = Workspace::discover(cli.home)?;
    workspace.ensure_exists()?;
    init_file_logging(&workspace.log_path());
    info!(
        "Starting confessor {} in {}",
        env!("CARGO_PKG_VERSION"),
        workspace.root().display()
    );

    let config = ConfigStore::new(workspace.config_path());
    let records = SqliteRecordStore::new(workspace.database_path());
    let mut presenter = TerminalPresenter::stdout();

    match cli.command {
        Commands::Run {
            mode,
            lang,
            profile,
        } => {
            records.init()?;

            let appearance = config.load(&profile).appearance;
            presenter.banner(&appearance.logo)?;
            presenter.message(MessageKind::Info, locale.welcome())?;

            // Nothing is stored unless every question gets answered
            let mut prompter = TerminalPrompter::stdio();
            let record = SessionService::new(config.clone()).run(
                &profile,
                &mode,
                &lang,
                &mut prompter,
            )?;

            presenter.message(MessageKind::Info, locale.saving_record())?;
            records.insert(&record)?;

            let report = ReportService::new(config, records).render_record(&record)?;
            presenter.report(locale.report_heading(), &report)?;
            Ok(())
        }
        Commands::Report {
            week,
            lang,
            profile,
        } => {
            let service = ReportService::new(config, records);
            if week {
                let summary = service.weekly(&profile, &lang)?;
                presenter.table(locale.weekly_title(), locale.summary_columns(), &summary)?;
            } else {
                for report in service.detailed(&profile, &lang)? {
                    presenter.report(locale.report_heading(), &report)?;
                }
            }
            Ok(())
        }
        Commands::AddQuestion {
            lang,
            mode,
            profile,
            question,
        } => {
            ProfileService::new(config).add_question(&profile, &lang, &mode, &question)?;
            presenter.message(MessageKind::Success, locale.question_added())?;
            Ok(())
        }
        Commands::ListQuestions {
            lang,
            mode,
            profile,
        } => {
            let questions = ProfileService::new(config).list_questions(&profile, &lang, &mode);
            if questions.is_empty() {
                presenter.message(MessageKind::Info, locale.no_questions_found())?;
            } else {
                presenter.message(
                    MessageKind::Info,
                    format_question_list(locale.questions_title(), &questions).trim_end(),
                )?;
            }
            Ok(())
        }
        Commands::AddProfile { profile, .. } => {
            ProfileService::new(config).create(&profile)?;
            presenter.message(MessageKind::Success, &locale.profile_added(&profile))?;
            Ok(())
        }
        Commands::RemoveProfile { profile, .. } => {
            ProfileService::new(config).delete(&profile)?;
            presenter.message(MessageKind::Success, &locale.profile_removed(&profile))?;
            Ok(())
        }
        Commands::Sync { .. } => {
            info!("Sync requested; not implemented");
            presenter.message(MessageKind::Warning, locale.sync_not_implemented())?;
            Ok(())
        }
    }
}
