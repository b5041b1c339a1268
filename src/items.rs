use crate::list::ListItem;
use crate::model::{unix_time, Build, BuildStatus, Repository};
use chrono::{DateTime, Utc};

pub fn status_symbol(status: BuildStatus) -> &'static str {
    match status {
        BuildStatus::Success => "✓",
        BuildStatus::Failure | BuildStatus::Error => "✗",
        BuildStatus::Killed | BuildStatus::Skipped | BuildStatus::Declined => "⊘",
        BuildStatus::Running => "⟳",
        BuildStatus::Blocked => "⏸",
        BuildStatus::Pending | BuildStatus::WaitingOnDependencies | BuildStatus::Unknown => "·",
    }
}

impl ListItem for Repository {
    fn title(&self) -> String {
        self.slug.clone()
    }

    fn subtitle(&self) -> String {
        if !self.active {
            return "inactive".to_string();
        }
        let b = &self.build;
        if b.number == 0 {
            return "no builds".to_string();
        }
        let mut parts = vec![format!("{} #{}", status_symbol(b.status), b.number)];
        if let Some(finished) = unix_time(b.finished) {
            parts.push(time_ago(finished, Utc::now()));
        }
        parts.join(" · ")
    }

    fn filter_value(&self) -> String {
        self.slug.clone()
    }
}

impl ListItem for Build {
    fn title(&self) -> String {
        format!(
            "{} #{} {}",
            status_symbol(self.status),
            self.number,
            first_line(&self.message)
        )
    }

    fn subtitle(&self) -> String {
        let mut parts = vec![self.event.clone(), self.target.clone(), self.author.clone()];
        let now = Utc::now();
        if let Some(finished) = unix_time(self.finished) {
            parts.push(time_ago(finished, now));
        } else if let Some(started) = unix_time(self.started) {
            parts.push(format!("started {}", time_ago(started, now)));
        }
        parts.join(" | ")
    }

    fn filter_value(&self) -> String {
        format!(
            "#{} {} {} {} {}",
            self.number,
            self.status.as_str(),
            self.message,
            self.event,
            self.target
        )
    }
}

fn first_line(message: &str) -> &str {
    message.lines().next().unwrap_or("")
}

pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let d = now.signed_duration_since(then);
    let plural = |n: i64, unit: &str| {
        if n == 1 {
            format!("1 {unit} ago")
        } else {
            format!("{n} {unit}s ago")
        }
    };
    if d.num_minutes() < 1 {
        "just now".to_string()
    } else if d.num_hours() < 1 {
        plural(d.num_minutes(), "minute")
    } else if d.num_days() < 1 {
        plural(d.num_hours(), "hour")
    } else {
        plural(d.num_days(), "day")
    }
}
