use clap::{Parser, Subcommand};
use todo_app_client::{
    DEFAULT_API_URL, HttpTodoApi, PriorityFilter, StatusFilter, TodoController, TodoFilters,
    TodoForm, TodoState,
};
use todo_core::{Priority, TodoError, TodoId, ValidationError};
use tracing_subscriber::EnvFilter;

/// Manage todos on a running todo server.
#[derive(Debug, Parser)]
#[command(name = "todo", version, about)]
struct Cli {
    /// Base URL of the todo API.
    #[arg(long, env = "TODO_API_URL", default_value = DEFAULT_API_URL, global = true)]
    api_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show todos, newest first.
    List {
        #[arg(long, value_enum, default_value_t)]
        status: StatusFilter,

        #[arg(long, value_enum, default_value_t)]
        priority: PriorityFilter,
    },
    /// Add a todo.
    Add {
        title: String,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(long, default_value = "medium", value_parser = parse_priority)]
        priority: Priority,
    },
    /// Flip a todo between pending and completed.
    Toggle {
        #[arg(value_parser = parse_todo_id)]
        id: TodoId,
    },
    /// Delete a todo.
    Delete {
        #[arg(value_parser = parse_todo_id)]
        id: TodoId,
    },
}

fn parse_priority(value: &str) -> Result<Priority, ValidationError> {
    value.parse()
}

fn parse_todo_id(value: &str) -> Result<TodoId, TodoError> {
    value.parse()
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut controller = TodoController::new(HttpTodoApi::new(cli.api_url));
    tracing::debug!("Using todo API at {}", controller.api().base_url());

    controller.fetch_todos().await;
    fail_on_error(controller.state())?;

    match cli.command {
        Command::List { status, priority } => {
            controller.filters = TodoFilters { status, priority };
        }
        Command::Add {
            title,
            description,
            priority,
        } => {
            let mut form = TodoForm::new(title)
                .with_description(description)
                .with_priority(priority);

            let Some(input) = form.submit() else {
                anyhow::bail!("{}", form.title_error.unwrap_or_default());
            };
            controller.add_todo(input).await;
        }
        Command::Toggle { id } => controller.toggle_todo(id).await,
        Command::Delete { id } => controller.delete_todo(id).await,
    }

    fail_on_error(controller.state())?;
    render(controller.state(), &controller.filters);

    Ok(())
}

fn fail_on_error(state: &TodoState) -> anyhow::Result<()> {
    match &state.error {
        Some(message) => anyhow::bail!("{message}"),
        None => Ok(()),
    }
}

fn render(state: &TodoState, filters: &TodoFilters) {
    let stats = state.stats();
    println!(
        "Total: {}  Active: {}  Completed: {}",
        stats.total, stats.active, stats.completed
    );
    println!();

    if let Some(message) = state.empty_message(filters) {
        println!("{message}");
        return;
    }

    for todo in state.visible(filters) {
        let mark = if todo.completed { "x" } else { " " };
        println!("[{mark}] {} ({})  {}", todo.title, todo.priority, todo.id);

        if !todo.description.is_empty() {
            println!("    {}", todo.description);
        }
    }
}
