use std::{error::Error, fs, path::PathBuf};

use clap::{Args, Parser, Subcommand};
use engine::{DEFAULT_CATEGORIES, Ledger, LedgerError, Money, Snapshot, SplitEntry, SplitType, split};
use uuid::Uuid;

mod settings;

#[derive(Parser, Debug)]
#[command(name = "splittab")]
#[command(about = "Expense-splitting ledger over a JSON snapshot file")]
struct Cli {
    /// Snapshot file path (also read from `SPLITTAB_STORE`; defaults to the
    /// `store` entry of `settings.toml`).
    #[arg(long, env = "SPLITTAB_STORE")]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    User(User),
    Group(Group),
    Expense(Expense),
    Balance(Balance),
    /// Print the default expense categories.
    Categories,
}

#[derive(Args, Debug)]
struct User {
    #[command(subcommand)]
    command: UserCommand,
}

#[derive(Subcommand, Debug)]
enum UserCommand {
    Create(UserCreateArgs),
    List,
}

#[derive(Args, Debug)]
struct UserCreateArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    avatar: Option<String>,
}

#[derive(Args, Debug)]
struct Group {
    #[command(subcommand)]
    command: GroupCommand,
}

#[derive(Subcommand, Debug)]
enum GroupCommand {
    Create(GroupCreateArgs),
    List,
}

#[derive(Args, Debug)]
struct GroupCreateArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    description: Option<String>,
    /// Member user id; repeat for every member.
    #[arg(long = "member", required = true)]
    members: Vec<Uuid>,
}

#[derive(Args, Debug)]
struct Expense {
    #[command(subcommand)]
    command: ExpenseCommand,
}

#[derive(Subcommand, Debug)]
enum ExpenseCommand {
    Add(ExpenseAddArgs),
    List(ExpenseListArgs),
}

#[derive(Args, Debug)]
struct ExpenseAddArgs {
    #[arg(long)]
    group: Uuid,
    #[arg(long)]
    title: String,
    #[arg(long)]
    description: Option<String>,
    #[arg(long, default_value = "Other")]
    category: String,
    #[arg(long, value_parser = parse_money)]
    amount: Money,
    #[arg(long)]
    payer: Uuid,
    /// `equal` (default) or `custom`; custom requires `--share` entries.
    #[arg(long, default_value = "equal", value_parser = parse_split_type)]
    split: SplitType,
    /// Custom share as `<user-id>=<amount>`; repeat for every member.
    #[arg(long = "share", value_parser = parse_share)]
    shares: Vec<SplitEntry>,
}

#[derive(Args, Debug)]
struct ExpenseListArgs {
    #[arg(long)]
    group: Uuid,
}

#[derive(Args, Debug)]
struct Balance {
    #[command(subcommand)]
    command: BalanceCommand,
}

#[derive(Subcommand, Debug)]
enum BalanceCommand {
    /// Net balance of one user, optionally scoped to a group.
    Of(BalanceOfArgs),
    /// Net pairwise balance across all groups.
    Between(BalanceBetweenArgs),
}

#[derive(Args, Debug)]
struct BalanceOfArgs {
    #[arg(long)]
    user: Uuid,
    #[arg(long)]
    group: Option<Uuid>,
}

#[derive(Args, Debug)]
struct BalanceBetweenArgs {
    #[arg(long)]
    user: Uuid,
    #[arg(long)]
    other: Uuid,
}

fn parse_money(raw: &str) -> Result<Money, String> {
    raw.parse::<Money>().map_err(|err| err.to_string())
}

fn parse_split_type(raw: &str) -> Result<SplitType, String> {
    SplitType::try_from(raw).map_err(|err| err.to_string())
}

fn parse_share(raw: &str) -> Result<SplitEntry, String> {
    let (user, amount) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected <user-id>=<amount>, got {raw}"))?;
    Ok(SplitEntry {
        user_id: user
            .trim()
            .parse::<Uuid>()
            .map_err(|err| err.to_string())?,
        amount: parse_money(amount)?,
    })
}

fn load_ledger(path: &PathBuf) -> Result<Ledger, Box<dyn Error + Send + Sync>> {
    let mut ledger = Ledger::builder().build();
    if path.exists() {
        let raw = fs::read_to_string(path)?;
        let snapshot: Snapshot = serde_json::from_str(&raw)?;
        ledger.import_state(snapshot)?;
    } else {
        tracing::info!(path = %path.display(), "no snapshot found, starting empty");
    }
    Ok(ledger)
}

fn save_ledger(path: &PathBuf, ledger: &Ledger) -> Result<(), Box<dyn Error + Send + Sync>> {
    let snapshot = ledger.export_state();
    fs::write(path, serde_json::to_string_pretty(&snapshot)?)?;
    tracing::info!(path = %path.display(), "saved snapshot");
    Ok(())
}

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let settings = settings::Settings::new()?;
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "splittab={level},engine={level}",
            level = settings.level
        ))
        .init();

    let store = cli
        .store
        .unwrap_or_else(|| PathBuf::from(&settings.store));
    let mut ledger = load_ledger(&store)?;

    match cli.command {
        Command::User(user) => match user.command {
            UserCommand::Create(args) => {
                let id = ledger.register_user(&args.name, &args.email, args.avatar.as_deref())?;
                save_ledger(&store, &ledger)?;
                println!("{id}");
            }
            UserCommand::List => {
                for user in ledger.users() {
                    println!("{}  {}  <{}>", user.id, user.name, user.email);
                }
            }
        },
        Command::Group(group) => match group.command {
            GroupCommand::Create(args) => {
                let members = args
                    .members
                    .iter()
                    .map(|id| {
                        ledger
                            .user(*id)
                            .cloned()
                            .ok_or_else(|| format!("unknown user: {id}"))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                let id = ledger.create_group(&args.name, args.description.as_deref(), members)?;
                save_ledger(&store, &ledger)?;
                println!("{id}");
            }
            GroupCommand::List => {
                for group in ledger.groups() {
                    println!(
                        "{}  {}  ({} members, {} expenses)",
                        group.id,
                        group.name,
                        group.members.len(),
                        group.expenses.len()
                    );
                }
            }
        },
        Command::Expense(expense) => match expense.command {
            ExpenseCommand::Add(args) => {
                let member_ids = ledger
                    .group(args.group)
                    .map(|group| group.member_ids())
                    .ok_or_else(|| LedgerError::GroupNotFound(args.group.to_string()))?;
                let shares = match args.split {
                    SplitType::Equal => split::equal_split(args.amount, &member_ids, args.payer)?,
                    SplitType::Custom => {
                        split::validate_custom_split(args.amount, &member_ids, &args.shares)?
                    }
                };
                let id = ledger.record_expense(
                    args.group,
                    &args.title,
                    args.description.as_deref(),
                    &args.category,
                    args.amount,
                    args.payer,
                    args.split,
                    shares,
                )?;
                save_ledger(&store, &ledger)?;
                println!("{id}");
            }
            ExpenseCommand::List(args) => {
                for expense in ledger.list_group_expenses(args.group) {
                    println!(
                        "{}  {}  {}  paid by {}  [{}]",
                        expense.timestamp.format("%Y-%m-%d"),
                        expense.title,
                        expense.amount,
                        expense.paid_by.name,
                        expense.category
                    );
                }
            }
        },
        Command::Balance(balance) => match balance.command {
            BalanceCommand::Of(args) => {
                println!("{}", ledger.balance_of(args.user, args.group));
            }
            BalanceCommand::Between(args) => {
                println!("{}", ledger.balance_between(args.user, args.other));
            }
        },
        Command::Categories => {
            for category in DEFAULT_CATEGORIES {
                println!("{category}");
            }
        }
    }

    Ok(())
}
