use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use maamulat::catalog;
use maamulat::clock::{parse_day_key, Clock, SystemClock};
use maamulat::config::Config;
use maamulat::domain::{CategoryMeta, CategoryUpdate, ItemUpdate, Level, TaskDefinition};
use maamulat::persistence::{ensure_dir, get_data_dir, init_local_data_dir, load_state, JsonDirSink, CONFIG_FILE};
use maamulat::progress::{StreakChange, CHILLAH_LENGTH};
use maamulat::report::{self, calculate_history_stats};
use maamulat::rewards::format_hasanat;
use maamulat::ticker::MidnightTimer;
use maamulat::{TaskOutcome, Tracker};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "maamulat")]
#[command(about = "Daily devotional habit tracker with streaks, a 40-day chillah and hasanat", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .maamulat directory in the current directory
    Init,
    /// Show today's tasks and progress (default)
    Status,
    /// Toggle a checkbox task
    Toggle { category: String, item: String },
    /// Record a time field such as wake or sleep (HH:MM)
    SetTime {
        category: String,
        item: String,
        time: String,
    },
    /// Run the day-boundary check
    CheckDay,
    /// Show the levels, or switch to one (resets today's tasks)
    Level { level: Option<String> },
    /// Show recorded history
    History,
    /// Generate a markdown progress report
    Report {
        /// Date to generate report for (YYYY-MM-DD format). Defaults to today.
        #[arg(short, long)]
        date: Option<String>,
        /// Output file path. Defaults to <data dir>/report-YYYY-MM-DD.md
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show achievements and their progress
    Achievements,
    /// Set the display name
    Name { name: String },
    /// Acknowledge a broken-streak alert
    Dismiss,
    /// Restart the chillah at day 1
    ResetChillah,
    /// Credit a finished tasbih session
    Tasbih { count: u32 },
    /// Edit the task tree
    #[command(subcommand)]
    Edit(EditCommand),
    /// Stay running and roll the day over at midnight
    Watch,
}

#[derive(Subcommand)]
enum EditCommand {
    /// Add a custom task to a category
    AddItem {
        category: String,
        name: String,
        #[arg(long)]
        name_en: Option<String>,
        #[arg(long, default_value_t = 10)]
        hasanat: u32,
        /// Record a time of day instead of a checkbox
        #[arg(long)]
        time: bool,
    },
    RemoveItem { category: String, item: String },
    UpdateItem {
        category: String,
        item: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        name_en: Option<String>,
        #[arg(long)]
        hasanat: Option<u32>,
    },
    AddCategory {
        id: String,
        name: String,
        #[arg(long, default_value = "#5D6D7E")]
        color: String,
        #[arg(long)]
        emoji: Option<String>,
    },
    RemoveCategory { category: String },
    UpdateCategory {
        category: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        name_en: Option<String>,
        #[arg(long)]
        color: Option<String>,
        #[arg(long)]
        emoji: Option<String>,
    },
    MoveCategory { from: usize, to: usize },
    MoveItem { category: String, from: usize, to: usize },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Init) = cli.command {
        let data_dir = init_local_data_dir()?;
        Config::default().save_to(&data_dir.join(CONFIG_FILE))?;
        println!("Initialized maamulat directory: {}", data_dir.display());
        println!();
        println!("Maamulat will now use this local directory for its state.");
        return Ok(());
    }

    let data_dir = get_data_dir()?;
    ensure_dir(&data_dir)?;
    let config = Config::load(&data_dir)?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut tracker = open_tracker(&data_dir, &config)?;
    let rollover = tracker.on_foreground();
    if rollover.streak_broken {
        println!("💔 You missed a day and your streak was reset.");
    }

    match cli.command.unwrap_or(Commands::Status) {
        // Handled before any state was loaded
        Commands::Init => {}
        Commands::Status => print_status(&tracker),
        Commands::Toggle { category, item } => {
            let outcome = tracker
                .toggle_item(&category, &item)
                .with_context(|| format!("No checkbox task {}/{}", category, item))?;
            print_outcome(&outcome);
        }
        Commands::SetTime { category, item, time } => {
            let outcome = tracker
                .set_item_time(&category, &item, &time)
                .with_context(|| format!("Could not set {}/{} to {} (expects a time field and HH:MM)", category, item, time))?;
            print_outcome(&outcome);
        }
        Commands::CheckDay => {
            // The startup foreground check already ran the rollover
            println!(
                "{}: tasks reset {}, streak broken {}, streak {}",
                tracker.today(),
                rollover.tasks_reset,
                rollover.streak_broken,
                tracker.progress().current_streak
            );
        }
        Commands::Level { level } => match level {
            Some(id) => {
                let level = parse_level(&id)?;
                tracker.switch_level(level);
                println!("Switched to {} level. Today's tasks were reset.", level);
            }
            None => print_levels(tracker.progress().level),
        },
        Commands::History => print_history(&tracker),
        Commands::Report { date, output } => {
            let date = match date {
                Some(key) => parse_date(&key)?,
                None => tracker.today(),
            };
            let state_dir = config.state_dir(&data_dir);
            println!("Generating report for {}...", date);
            let path = report::generate_report(
                &state_dir,
                tracker.store(),
                tracker.progress(),
                tracker.achievements(),
                date,
                output,
            )?;
            println!("Report generated: {}", path.display());
        }
        Commands::Achievements => print_achievements(&tracker),
        Commands::Name { name } => {
            tracker.set_name(name);
            println!("Name set to {}", tracker.progress().name);
        }
        Commands::Dismiss => tracker.dismiss_streak_alert(),
        Commands::ResetChillah => {
            tracker.reset_chillah();
            println!("Chillah restarted at day 1/{}", CHILLAH_LENGTH);
        }
        Commands::Tasbih { count } => {
            let unlocked = tracker.add_tasbih(count);
            println!("+{} hasanat", count);
            print_unlocked(&tracker, &unlocked);
        }
        Commands::Edit(command) => {
            if !apply_edit(&mut tracker, command) {
                anyhow::bail!("Nothing changed: unknown id, duplicate id or index out of range");
            }
            print_status(&tracker);
        }
        Commands::Watch => watch(&mut tracker)?,
    }

    Ok(())
}

fn open_tracker(data_dir: &std::path::Path, config: &Config) -> Result<Tracker> {
    let state_dir = config.state_dir(data_dir);
    ensure_dir(&state_dir)?;

    let clock = SystemClock;
    let state = load_state(&state_dir, config.default_level, clock.today())
        .with_context(|| format!("Failed to load state from {}", state_dir.display()))?;

    Ok(Tracker::new(state, Box::new(clock), Box::new(JsonDirSink::new(state_dir))).with_congregation(config.congregation))
}

fn parse_level(id: &str) -> Result<Level> {
    Level::all()
        .iter()
        .copied()
        .find(|level| level.as_str() == id)
        .with_context(|| format!("Unknown level '{}'. Use beginner, intermediate or advanced", id))
}

fn parse_date(key: &str) -> Result<NaiveDate> {
    parse_day_key(key).with_context(|| format!("Invalid date '{}'. Use YYYY-MM-DD", key))
}

fn apply_edit(tracker: &mut Tracker, command: EditCommand) -> bool {
    match command {
        EditCommand::AddItem {
            category,
            name,
            name_en,
            hasanat,
            time,
        } => {
            let mut task = TaskDefinition::custom(name, hasanat);
            if let Some(name_en) = name_en {
                task = task.with_name_en(name_en);
            }
            if time {
                task = task.time_field();
            }
            tracker.edit(|store| store.add_item(&category, task))
        }
        EditCommand::RemoveItem { category, item } => tracker.edit(|store| store.remove_item(&category, &item)),
        EditCommand::UpdateItem {
            category,
            item,
            name,
            name_en,
            hasanat,
        } => {
            let update = ItemUpdate {
                name,
                name_en,
                hasanat,
                ..ItemUpdate::default()
            };
            tracker.edit(|store| store.update_item(&category, &item, &update))
        }
        EditCommand::AddCategory { id, name, color, emoji } => {
            let mut meta = CategoryMeta::new(id, name, color);
            meta.emoji = emoji;
            tracker.edit(|store| store.add_category(meta))
        }
        EditCommand::RemoveCategory { category } => tracker.edit(|store| store.remove_category(&category)),
        EditCommand::UpdateCategory {
            category,
            name,
            name_en,
            color,
            emoji,
        } => {
            let update = CategoryUpdate {
                name,
                name_en,
                color,
                emoji,
                ..CategoryUpdate::default()
            };
            tracker.edit(|store| store.update_category(&category, &update))
        }
        EditCommand::MoveCategory { from, to } => tracker.edit(|store| store.reorder_categories(from, to)),
        EditCommand::MoveItem { category, from, to } => {
            tracker.edit(|store| store.reorder_items(&category, from, to))
        }
    }
}

fn watch(tracker: &mut Tracker) -> Result<()> {
    let clock = SystemClock;
    let mut timer = MidnightTimer::armed(clock.now());
    println!("Watching for midnight, deadline {:?}. Ctrl-C to stop.", timer.deadline());

    loop {
        let now = clock.now();
        if timer.poll(now) {
            let rollover = tracker.on_midnight();
            tracing::info!(
                tasks_reset = rollover.tasks_reset,
                streak_broken = rollover.streak_broken,
                "midnight rollover"
            );
            if rollover.streak_broken {
                println!("💔 Streak lost overnight.");
            }
            print_status(tracker);
        }
        std::thread::sleep(timer.sleep_for(now));
    }
}

fn print_status(tracker: &Tracker) {
    let progress = tracker.progress();
    let stats = tracker.completion_stats();

    println!("{} · {} · {}", progress.name, progress.level, tracker.today());
    println!(
        "{}/{} done ({}%) · streak {} · chillah {}/{} · hasanat {} today, {} total",
        stats.completed,
        stats.total,
        stats.percent,
        progress.current_streak,
        progress.chillah_day,
        CHILLAH_LENGTH,
        format_hasanat(progress.today_hasanat),
        format_hasanat(progress.total_hasanat)
    );
    if progress.streak_broken {
        println!("💔 Streak broken. Run `maamulat dismiss` to acknowledge.");
    }
    println!();

    for category in &tracker.store().categories {
        let emoji = category.meta.emoji.as_deref().unwrap_or("•");
        println!("{} {} [{}]", emoji, category.meta.name_en, category.id());
        for item in &category.items {
            match (&item.time_value, item.is_time()) {
                (Some(time), true) => println!("  [{}] {} {}", time, item.task.name_en, item.id()),
                (None, true) => println!("  [--:--] {} {}", item.task.name_en, item.id()),
                _ => println!(
                    "  [{}] {} {}",
                    if item.completed { "x" } else { " " },
                    item.task.name_en,
                    item.id()
                ),
            }
        }
    }
}

fn print_outcome(outcome: &TaskOutcome) {
    let state = if outcome.completed { "done" } else { "not done" };
    print!("Marked {}", state);
    if outcome.hasanat_earned > 0 {
        print!(" · +{} hasanat", outcome.hasanat_earned);
    }
    println!(" · {}/{} ({}%)", outcome.stats.completed, outcome.stats.total, outcome.stats.percent);

    match outcome.streak {
        Some(StreakChange::Started) => println!("🔥 Day complete, streak started"),
        Some(StreakChange::Extended { streak, chillah_day }) => {
            println!("🔥 Streak {} · chillah day {}/{}", streak, chillah_day, CHILLAH_LENGTH)
        }
        _ => {}
    }
    for id in &outcome.unlocked {
        println!("🏆 Unlocked {}", id);
    }
}

fn print_unlocked(tracker: &Tracker, unlocked: &[String]) {
    for id in unlocked {
        if let Some(achievement) = tracker.achievements().get(id) {
            println!("🏆 Unlocked {}", achievement.name);
        }
    }
}

fn print_levels(current: Level) {
    for level in Level::all() {
        let summary = catalog::summary(*level);
        let marker = if *level == current { "*" } else { " " };
        println!(
            "{} {} ({}) · {} tasks · {}",
            marker,
            summary.title,
            level,
            catalog::total_tasks(*level),
            summary.est_time
        );
        println!("    {}", summary.description);
    }
}

fn print_history(tracker: &Tracker) {
    let records = &tracker.store().day_records;
    let history = calculate_history_stats(records);

    println!(
        "{} days recorded · {} at 60%+ · {} perfect · average {:.1}%",
        history.days_recorded, history.days_meeting_threshold, history.perfect_days, history.average_percent
    );
    for record in records.iter().rev() {
        println!(
            "{}  {:>3}%  {}/{}{}{}",
            record.date,
            record.completion_percent,
            record.completed_count,
            record.total_count,
            if record.tahajjud { "  tahajjud" } else { "" },
            if record.quran { "  quran" } else { "" }
        );
    }
}

fn print_achievements(tracker: &Tracker) {
    let book = tracker.achievements();
    let stats = tracker.achievement_stats();

    println!("{}/{} unlocked", book.unlocked_count(), book.achievements().len());
    for achievement in book.achievements() {
        if achievement.unlocked {
            println!("🏆 {} · {}", achievement.name, achievement.description);
        } else {
            let current = book.current_value(&achievement.id, &stats);
            println!(
                "   {} · {} ({}%)",
                achievement.name,
                achievement.description,
                book.progress_percent(&achievement.id, current)
            );
        }
    }
}
