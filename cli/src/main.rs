//! TrustNet CLI — drives the verification workflow from the terminal.
//!
//! Every command resolves the persisted session, passes the view-level
//! access guard, and then calls into the workflow engine. The `enrich`
//! command stands in for the asynchronous OCR/AI collaborator: an operator
//! supplies the report fields, the engine never invents them.

mod config;
mod logging;
mod state;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use config::CliConfig;
use logging::LogFormat;
use std::path::PathBuf;
use trustnet_session::{authorize, AccessDecision, AuthProvider, DirectoryAuthProvider, RegistrationRequest, SessionStore, View};
use trustnet_store::FileStore;
use trustnet_types::{
    Confidence, DocumentId, EnrichmentReport, ExtractedFields, FileKind, FileReference, Identity,
    Role,
};
use trustnet_workflow::{DocumentRecord, SubmitRequest, WorkflowEngine};

#[derive(Parser)]
#[command(name = "trustnet", about = "TrustNet identity document verification workflow")]
struct Cli {
    /// Directory holding the document store, user directory, and session.
    #[arg(long, env = "TRUSTNET_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "TRUSTNET_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "TRUSTNET_LOG_FORMAT")]
    log_format: Option<String>,

    /// Path to a TOML configuration file. If provided, file settings are
    /// used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Register a new account with the account service.
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Account role: "submitter", "verifier", or "issuer".
        #[arg(long)]
        role: String,
    },
    /// Sign in and persist the session.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Clear the session.
    Logout,
    /// Show the signed-in identity.
    Whoami,
    /// Upload a document for verification.
    Submit {
        /// Document type: "national-id", "passport", "driver-license",
        /// "birth-certificate", or "other".
        #[arg(long = "type")]
        document_type: String,
        /// Name of the uploaded file.
        #[arg(long)]
        file: String,
    },
    /// Deliver an enrichment report for a submitted document.
    Enrich {
        document: u64,
        #[arg(long)]
        ocr_confidence: u8,
        /// "approve", "reject", or "review-required".
        #[arg(long)]
        recommendation: String,
        #[arg(long)]
        ai_confidence: u8,
        /// Risk flag raised by the analyzer; repeatable.
        #[arg(long = "flag")]
        flags: Vec<String>,
        #[arg(long)]
        full_name: Option<String>,
        #[arg(long)]
        date_of_birth: Option<String>,
        #[arg(long)]
        id_number: Option<String>,
        #[arg(long)]
        issued_date: Option<String>,
        #[arg(long)]
        expiry_date: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        nationality: Option<String>,
    },
    /// Show your role-scoped queue.
    Queue,
    /// Claim a queued document for review.
    Open { document: u64 },
    /// Record a decision on a document under review.
    Decide {
        document: u64,
        /// "approve", "reject", or "pending" (needs more information).
        #[arg(long)]
        decision: String,
        #[arg(long, default_value = "")]
        remarks: String,
        /// Version observed when the record was loaded; defaults to the
        /// current one.
        #[arg(long)]
        expected_version: Option<u64>,
    },
    /// Re-upload a document returned for more information.
    Resubmit {
        document: u64,
        #[arg(long)]
        file: String,
    },
    /// Show one document record.
    Show { document: u64 },
    /// List your approved (issued) documents.
    Issued,
    /// List flagged documents system-wide.
    Flagged,
    /// Export the system-wide CSV report.
    Report,
}

/// Everything a command handler needs, loaded from the data directory.
struct App {
    session: SessionStore,
    auth: DirectoryAuthProvider,
    engine: WorkflowEngine<FileStore>,
    session_path: PathBuf,
    users_path: PathBuf,
}

impl App {
    fn open(config: &CliConfig) -> Result<Self> {
        std::fs::create_dir_all(&config.data_dir)
            .with_context(|| format!("creating data directory {}", config.data_dir.display()))?;

        let session_path = config.data_dir.join("session.json");
        let users_path = config.data_dir.join("users.json");
        let documents_path = config.data_dir.join("documents.json");

        let session = SessionStore::new();
        if let Some(identity) = state::load_session(&session_path)? {
            session.sign_in(identity);
        }
        let auth = DirectoryAuthProvider::from_users(state::load_users(&users_path)?);
        let engine = WorkflowEngine::new(FileStore::open(documents_path)?)?;

        Ok(Self {
            session,
            auth,
            engine,
            session_path,
            users_path,
        })
    }

    /// Pass the view guard, or fail with the redirect the UI would perform.
    fn require_view(&self, view: View) -> Result<Identity> {
        let identity = self.session.current_identity();
        match authorize(identity.as_ref(), view) {
            AccessDecision::Allow => {
                identity.context("sign in first (trustnet login --email … --password …)")
            }
            AccessDecision::RedirectTo(target) => {
                bail!("not available for your role — redirected to {target}")
            }
        }
    }

    fn signed_in(&self) -> Result<Identity> {
        self.session
            .current_identity()
            .context("sign in first (trustnet login --email … --password …)")
    }

    fn persist_session(&self) -> Result<()> {
        state::save_session(&self.session_path, self.session.current_identity().as_ref())
    }

    fn persist_users(&self) -> Result<()> {
        state::save_users(&self.users_path, self.auth.users())
    }
}

/// The view that authorizes recording decisions, per role. Verifiers
/// decide from the review screen; issuers from their dashboard.
fn decision_view(role: Role) -> View {
    match role {
        Role::Issuer => View::IssuerDashboard,
        _ => View::DocumentReview,
    }
}

fn print_record(record: &DocumentRecord) {
    println!(
        "{}  {}  {}  {}  v{}",
        record.id, record.document_type, record.priority, record.state, record.version
    );
    println!("  owner: {} <{}>", record.owner_name, record.owner_email);
    let kind = match record.file.kind() {
        FileKind::Pdf => "pdf",
        FileKind::Image => "image",
    };
    println!(
        "  file: {} ({kind})  submitted: {}",
        record.file.file_name, record.submitted_at
    );
    if let Some(ocr) = record.ocr_confidence {
        println!(
            "  ocr: {}  ai: {} ({})",
            ocr,
            record
                .recommendation
                .map(|r| r.as_str())
                .unwrap_or("-"),
            record
                .ai_confidence
                .map(|c| c.to_string())
                .unwrap_or_else(|| "-".into()),
        );
    }
    if !record.risk_flags.is_empty() {
        let flags: Vec<&str> = record.risk_flags.iter().map(String::as_str).collect();
        println!("  flags: {}", flags.join(", "));
    }
    if let Some(decision) = record.decision {
        println!(
            "  decision: {} at {}{}",
            decision,
            record
                .decided_at
                .map(|t| t.to_string())
                .unwrap_or_else(|| "-".into()),
            record
                .decision_remarks
                .as_deref()
                .map(|r| format!(" — {r}"))
                .unwrap_or_default(),
        );
    }
}

fn print_queue(records: &[DocumentRecord]) {
    if records.is_empty() {
        println!("(queue is empty)");
        return;
    }
    for record in records {
        let flags = if record.is_flagged() {
            format!("  [{} flag(s)]", record.risk_flags.len())
        } else {
            String::new()
        };
        println!(
            "{}  {}  {}  {}  {}{}",
            record.id,
            record.document_type,
            record.priority,
            record.state,
            record.owner_email,
            flags,
        );
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let file_config: Option<CliConfig> = match &cli.config {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("reading config file {}", path.display()))?;
            Some(
                CliConfig::from_toml_str(&contents)
                    .with_context(|| format!("parsing config file {}", path.display()))?,
            )
        }
        None => None,
    };

    let base = file_config.unwrap_or_default();
    let config = CliConfig {
        data_dir: cli.data_dir.clone().unwrap_or(base.data_dir),
        log_format: match cli.log_format.as_deref() {
            Some("json") => LogFormat::Json,
            Some("human") => LogFormat::Human,
            Some(other) => bail!("unknown log format {other:?} (expected human or json)"),
            None => base.log_format,
        },
        log_level: cli.log_level.clone().unwrap_or(base.log_level),
    };
    logging::init_logging(config.log_format, &config.log_level);

    let mut app = App::open(&config)?;
    run(&mut app, cli.command)?;

    for event in app.engine.take_events() {
        tracing::debug!(?event, "workflow event");
    }
    Ok(())
}

fn run(app: &mut App, command: Command) -> Result<()> {
    match command {
        Command::Register {
            name,
            email,
            password,
            role,
        } => {
            let role: Role = role.parse()?;
            let identity = app.auth.register(RegistrationRequest {
                name,
                email,
                password,
                role,
            })?;
            app.persist_users()?;
            println!("registered {identity}");
        }

        Command::Login { email, password } => {
            let identity = app.auth.login(&email, &password)?;
            let home = View::home_for(identity.role);
            app.session.sign_in(identity.clone());
            app.persist_session()?;
            println!("signed in as {identity}");
            println!("home view: {home}");
        }

        Command::Logout => {
            app.session.sign_out();
            app.persist_session()?;
            println!("signed out");
        }

        Command::Whoami => match app.session.current_identity() {
            Some(identity) => println!("{identity}"),
            None => println!("not signed in"),
        },

        Command::Submit {
            document_type,
            file,
        } => {
            let caller = app.require_view(View::DocumentUpload)?;
            let record = app.engine.submit(
                &caller,
                SubmitRequest {
                    document_type: document_type.parse()?,
                    file: FileReference::new(file),
                },
            )?;
            println!("submitted {} ({} priority)", record.id, record.priority);
        }

        Command::Enrich {
            document,
            ocr_confidence,
            recommendation,
            ai_confidence,
            flags,
            full_name,
            date_of_birth,
            id_number,
            issued_date,
            expiry_date,
            address,
            nationality,
        } => {
            let record = app.engine.handle_enrichment(EnrichmentReport {
                document_id: DocumentId::new(document),
                extracted: ExtractedFields {
                    full_name,
                    date_of_birth,
                    id_number,
                    issued_date,
                    expiry_date,
                    address,
                    nationality,
                },
                ocr_confidence: Confidence::new(ocr_confidence),
                recommendation: recommendation.parse()?,
                ai_confidence: Confidence::new(ai_confidence),
                risk_flags: flags,
            })?;
            println!("{} enriched and queued for review", record.id);
        }

        Command::Queue => {
            let caller = app.signed_in()?;
            let queue = app.engine.queue_for(&caller)?;
            print_queue(&queue);
            let stats = app.engine.queue_stats(&caller)?;
            println!(
                "total {}  queued {}  under-review {}  awaiting {}  approved {}  rejected {}",
                stats.total,
                stats.queued_for_review,
                stats.under_review,
                stats.awaiting_submitter,
                stats.approved,
                stats.rejected,
            );
        }

        Command::Open { document } => {
            let caller = app.require_view(View::DocumentReview)?;
            let record = app.engine.open_for_review(DocumentId::new(document), &caller)?;
            print_record(&record);
        }

        Command::Decide {
            document,
            decision,
            remarks,
            expected_version,
        } => {
            let caller = app.signed_in()?;
            let caller = match authorize(Some(&caller), decision_view(caller.role)) {
                AccessDecision::Allow => caller,
                AccessDecision::RedirectTo(target) => {
                    bail!("not available for your role — redirected to {target}")
                }
            };
            let id = DocumentId::new(document);
            let expected = match expected_version {
                Some(version) => version,
                None => app.engine.document(id, &caller)?.version,
            };
            let record =
                app.engine
                    .submit_decision(id, &caller, decision.parse()?, &remarks, expected)?;
            println!("{} is now {}", record.id, record.state);
        }

        Command::Resubmit { document, file } => {
            let caller = app.require_view(View::DocumentUpload)?;
            let record =
                app.engine
                    .resubmit(DocumentId::new(document), &caller, FileReference::new(file))?;
            println!("{} re-submitted", record.id);
        }

        Command::Show { document } => {
            let caller = app.signed_in()?;
            let record = app.engine.document(DocumentId::new(document), &caller)?;
            print_record(&record);
        }

        Command::Issued => {
            let caller = app.require_view(View::IssuedDocuments)?;
            let issued = app.engine.issued_documents(&caller)?;
            print_queue(&issued);
        }

        Command::Flagged => {
            let caller = app.require_view(View::FraudDetection)?;
            let flagged = app.engine.flagged_documents(&caller)?;
            print_queue(&flagged);
        }

        Command::Report => {
            let caller = app.require_view(View::IssuerDashboard)?;
            print!("{}", app.engine.csv_report(&caller)?);
        }
    }
    Ok(())
}
