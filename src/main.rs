//! TechCards Telegram Bot
//!
//! Main application entry point

use std::path::Path;
use std::sync::Arc;
use teloxide::{prelude::*, types::Update};
use teloxide::dispatching::UpdateHandler;
use teloxide::utils::command::BotCommands;
use tracing::{info, warn, error};

use TechCards::{
    config::Settings,
    content::Catalog,
    utils::logging,
    services::ServiceFactory,
    handlers::{
        commands::{handle_command, Command},
        callbacks::handle_callback_query,
        messages::handle_message,
    },
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging, the guard flushes the log file on exit
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!(variant = ?settings.bot.variant, "Starting {}...", TechCards::info());

    // Load content
    let catalog = match settings.content.directory.as_deref() {
        Some(directory) => {
            info!(directory = %directory, "Loading content from directory");
            Catalog::load(Path::new(directory)).await?
        }
        None => Catalog::builtin()?,
    };

    // Initialize bot
    let bot = Bot::new(&settings.bot.token);
    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!(error = %e, "Failed to register bot commands");
    }

    // Initialize services
    info!("Initializing services...");
    let services = Arc::new(ServiceFactory::new(settings, catalog));

    let handler = create_handler();

    let mut dispatcher = Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![services.clone()])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd.id);
        })
        .enable_ctrlc_handler()
        .build();

    info!("TechCards bot is ready, starting polling...");
    dispatcher.dispatch().await;

    let stats = services.stats().await;
    info!(
        users = stats.total_users,
        users_in_quiz = stats.users_in_quiz,
        cards_viewed = stats.cards_viewed,
        "TechCards bot has been shut down."
    );
    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    dptree::entry()
        .branch(
            Update::filter_message()
                .branch(
                    dptree::entry()
                        .filter_command::<Command>()
                        .endpoint(handle_commands),
                )
                .branch(dptree::endpoint(handle_messages)),
        )
        .branch(Update::filter_callback_query().endpoint(handle_callbacks))
}

/// Handle bot commands
async fn handle_commands(
    bot: Bot,
    msg: Message,
    cmd: Command,
    services: Arc<ServiceFactory>,
) -> HandlerResult {
    if let Err(e) = handle_command(bot, msg, cmd, (*services).clone()).await {
        error!(error = %e, "Error handling command");
        return Err(e.into());
    }
    Ok(())
}

/// Handle regular messages
async fn handle_messages(bot: Bot, msg: Message) -> HandlerResult {
    if let Err(e) = handle_message(bot, msg).await {
        error!(error = %e, "Error handling message");
        return Err(e.into());
    }
    Ok(())
}

/// Handle callback queries
async fn handle_callbacks(
    bot: Bot,
    query: CallbackQuery,
    services: Arc<ServiceFactory>,
) -> HandlerResult {
    let user_id = query.from.id.0 as i64;
    if let Err(e) = handle_callback_query(bot, query, (*services).clone()).await {
        error!(user_id = user_id, error = %e, "Error handling callback query");
        return Err(e.into());
    }
    Ok(())
}
