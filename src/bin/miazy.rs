// ─────────────────────────────────────────────────────────────────────────────
//  Miazy: terminal host for the listing app screens.
//
//  Looks up CEPs, browses the property catalog and walks the login / sign-up
//  forms from the command line.
// ─────────────────────────────────────────────────────────────────────────────
use std::path::PathBuf;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use miazy::RealtorRegisterScreen;
use miazy::RegisterScreen;
use miazy::Result;
use miazy::Route;
use miazy::config::config_path_from_env;
use miazy::config::load_config_or_default;
use miazy::constants::APP_NAME;
use miazy::handler::Catalog;
use miazy::handler::CatalogFilter;
use miazy::handler::HomeScreen;
use miazy::handler::Navigator;
use miazy::handler::SubmitResponse;
use miazy::handler::ViaCepClient;
use miazy::model::FieldKey;
use miazy::model::Notice;
use miazy::setup_tracing;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "miazy", version, about = "Real-estate listing app screens from the terminal")]
struct Cli {
    /// Path to the TOML config (defaults to $MIAZY_CONFIG, then Config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Look up the address of an 8-digit CEP
    Cep { cep: String },
    /// List the property cards
    Catalog {
        /// Tudo, Casa or Apartamento
        #[arg(long, default_value = "Tudo")]
        filter: String,
    },
    /// Show the description of a listing
    Describe { title: String },
    /// Sign in with an existing account
    Login {
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
    },
    /// Create a client account, or a realtor account with --realtor
    Register {
        #[command(flatten)]
        account: AccountArgs,
        #[arg(long)]
        realtor: bool,
        #[arg(long, default_value = "")]
        creci: String,
    },
    /// Realtor-only sign-up
    Realtor {
        #[command(flatten)]
        account: AccountArgs,
        #[arg(long, default_value = "")]
        creci: String,
        /// Follow the "Faça login" link instead of submitting
        #[arg(long)]
        login: bool,
    },
}

#[derive(Debug, Args)]
struct AccountArgs {
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    password: String,
    #[arg(long, default_value = "")]
    confirm_password: String,
}

fn print_notice(notice: &Notice) {
    println!("{}", notice);
}

fn report(
    navigator: &mut Navigator,
    response: &SubmitResponse,
) {
    print_notice(&response.notice);
    if let Some(route) = response.navigate_to {
        navigator.navigate(route);
        println!("-> {}", route.path());
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(config_path_from_env);
    let config = load_config_or_default(&config_path)?;
    let _guard = setup_tracing(APP_NAME, &config.logging);
    info!("miazy::config::loaded::{}", config_path.display());

    let mut navigator = Navigator::new();

    match cli.command {
        Command::Cep { cep } => {
            let mut home = HomeScreen::new(ViaCepClient::new(&config.address_lookup)?);
            match home.search_cep(&cep).await {
                Ok(address) => println!("{}", address),
                Err(e) => print_notice(&Notice::from(&e)),
            }
        },
        Command::Catalog { filter } => {
            let filter = CatalogFilter::from_label(&filter).unwrap_or_default();
            let catalog = Catalog::default();
            for (section, cards) in catalog.sections(filter) {
                println!("{}", section.title());
                for card in cards {
                    println!("  {} ({})", card.title, catalog.location());
                }
            }
        },
        Command::Describe { title } => {
            let catalog = Catalog::default();
            print_notice(&Notice::new(title.clone(), catalog.describe(&title)));
        },
        Command::Login { email, password } => {
            navigator.navigate(Route::Register);
            let mut screen = RegisterScreen::new();
            screen.form.toggle_mode();
            screen.form.set_field(FieldKey::Email, email);
            screen.form.set_field(FieldKey::Password, password);
            report(&mut navigator, &screen.submit());
        },
        Command::Register { account, realtor, creci } => {
            navigator.navigate(Route::Register);
            let mut screen = RegisterScreen::new();
            if realtor {
                screen.form.toggle_role();
                screen.form.set_field(FieldKey::License, creci);
            }
            screen.form.set_field(FieldKey::Name, account.name);
            screen.form.set_field(FieldKey::Email, account.email);
            screen.form.set_field(FieldKey::Password, account.password);
            screen.form.set_field(FieldKey::ConfirmPassword, account.confirm_password);
            report(&mut navigator, &screen.submit());
        },
        Command::Realtor { account, creci, login } => {
            navigator.navigate(Route::Register);
            navigator.navigate(Route::RealtorRegister);
            let mut screen = RealtorRegisterScreen::new();
            if login {
                let route = screen.go_to_login();
                navigator.navigate(route);
                println!("-> {}", route.path());
                return Ok(());
            }
            screen.form.set_field(FieldKey::Name, account.name);
            screen.form.set_field(FieldKey::Email, account.email);
            screen.form.set_field(FieldKey::License, creci);
            screen.form.set_field(FieldKey::Password, account.password);
            screen.form.set_field(FieldKey::ConfirmPassword, account.confirm_password);
            report(&mut navigator, &screen.submit());
        },
    }

    Ok(())
}
