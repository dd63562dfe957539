//! Plain-text rendering of the dashboard for a terminal.

use std::fmt;
use std::io;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

use crate::dashboard::Dashboard;
use crate::view::{InfoList, Keyed};

/// Text layout of a dashboard: sections of aligned rows, then transfer cards.
pub struct DashboardView<'a>(pub &'a Dashboard);

impl fmt::Display for DashboardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_section(f, "General", self.0.general())?;
        writeln!(f)?;
        write_section(f, "VFS", self.0.vfs())?;
        writeln!(f)?;

        let cards = self.0.transfers().cards();
        writeln!(f, "Transfers ({})", cards.len())?;
        if cards.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for card in cards {
            writeln!(f, "  {}", card.name())?;
            writeln!(f, "    {}", card.tags().join(" | "))?;
        }
        Ok(())
    }
}

pub fn render(dashboard: &Dashboard) -> String {
    DashboardView(dashboard).to_string()
}

/// Clear the terminal, home the cursor and draw the dashboard.
pub fn draw<W: io::Write>(out: &mut W, dashboard: &Dashboard) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    write!(out, "{}", DashboardView(dashboard))?;
    out.flush()
}

fn write_section(f: &mut fmt::Formatter<'_>, title: &str, list: &InfoList) -> fmt::Result {
    writeln!(f, "{title}")?;
    let width = list
        .nodes()
        .iter()
        .map(|node| node.key().len())
        .max()
        .unwrap_or(0);
    for node in list.nodes() {
        writeln!(f, "  {:<width$}  {}", node.key(), node.value())?;
    }
    Ok(())
}
