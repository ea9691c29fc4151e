use chrono::Datelike;
use ordo::{Calendar, CelebrationInstance, Color, ResolvedDay, RunMetrics, SeasonKey};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
    pub const WHITE: &str = "\x1b[97m";
    pub const PINK: &str = "\x1b[95m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

fn color_code(color: Color) -> &'static str {
    match color {
        Color::White | Color::Gold => ansi::WHITE,
        Color::Red => ansi::RED,
        Color::Green => ansi::GREEN,
        Color::Violet => ansi::MAGENTA,
        Color::Pink => ansi::PINK,
        Color::Blue => ansi::BLUE,
        Color::Black => ansi::GRAY,
    }
}

fn season_label(key: SeasonKey) -> &'static str {
    match key {
        SeasonKey::Advent => "Advent",
        SeasonKey::Christmas => "Christmas",
        SeasonKey::OrdinaryTime1 | SeasonKey::OrdinaryTime2 => "Ordinary Time",
        SeasonKey::Lent => "Lent",
        SeasonKey::HolyWeek => "Holy Week",
        SeasonKey::Easter => "Easter",
    }
}

fn title(celebration: &CelebrationInstance) -> &str {
    celebration.celebration.title.as_deref().unwrap_or_else(|| celebration.id())
}

pub fn print_calendar(heading: &str, calendar: &Calendar, metrics: &[RunMetrics], color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("✝  {heading}"), ansi::CYAN)));

    let mut banner = None;
    for day in calendar {
        let key = day.display_season();
        if banner != Some(key) {
            banner = Some(key);
            let cycles = day.head().cycles;
            println!(
                "\n{} {}",
                palette.paint(format!("━━━ {} ━━━", season_label(key)), ansi::GRAY),
                palette.dim(format!("(cycle {:?}, year {:?})", cycles.sunday_cycle, cycles.weekday_cycle)),
            );
        }
        print_day(day, &palette);
    }

    if !metrics.is_empty() {
        println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
        for run in metrics {
            print_metrics(run, &palette);
        }
    }
    println!();
}

fn print_day(day: &ResolvedDay, palette: &ansi::Palette) {
    let head = day.head();
    let marker = palette.paint("●", color_code(head.celebration.primary_color()));
    let mut line = format!(
        "  {} {} {} {}",
        palette.paint(day.date.format("%Y-%m-%d").to_string(), ansi::YELLOW),
        palette.dim(day.date.weekday().to_string()),
        marker,
        palette.bold(title(head)),
    );
    line.push_str(&format!("  {}", palette.dim(format!("{:?}", head.rank()))));
    if head.celebration.is_holy_day_of_obligation {
        line.push_str(&format!(" {}", palette.paint("†", ansi::RED)));
    }
    if let Some(from) = head.transferred_from {
        line.push_str(&format!(" {}", palette.paint(format!("(from {from})"), ansi::BLUE)));
    }
    println!("{line}");

    for other in day.celebrations.iter().skip(1) {
        let note = if other.commemorated { "commemoration" } else { "or" };
        println!(
            "      {} {} {}",
            palette.dim(note),
            palette.paint("●", color_code(other.celebration.primary_color())),
            title(other),
        );
    }
}

fn print_metrics(metrics: &RunMetrics, palette: &ansi::Palette) {
    println!(
        "  Total: {}  │  Build: {}  │  Overlay: {}  │  Transfer: {} ({} moved)  │  Resolve: {}",
        palette.paint(format!("{:?}", metrics.total), ansi::GREEN),
        palette.paint(format!("{:?}", metrics.build.duration), ansi::CYAN),
        palette.dim(format!("{:?}", metrics.overlay.duration)),
        palette.dim(format!("{:?}", metrics.transfer.duration)),
        palette.paint(metrics.transfer.produced.to_string(), ansi::YELLOW),
        palette.dim(format!("{:?}", metrics.resolve.duration)),
    );
}

/// Single-date report.
pub fn print_single_day(day: &ResolvedDay, color: bool) {
    let palette = ansi::Palette::new(color);
    let head = day.head();
    println!(
        "\n{} {}",
        palette.paint(format!("━━━ {} ━━━", season_label(day.display_season())), ansi::GRAY),
        palette.dim(format!("week {}", head.week_of_season)),
    );
    print_day(day, &palette);
    println!();
}
