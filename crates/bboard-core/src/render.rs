//! Plain-text rendering of board states.

use std::fmt;

use crate::item;
use crate::state::State;
use crate::BOARD_SIZE;

/// Three-character glyph for a cell value.
pub fn print_item(cell: i32) -> &'static str {
    if item::is_wood(cell) {
        return "[ ]";
    }
    if item::is_flame(cell) {
        return " * ";
    }
    match cell {
        item::PASSAGE => "   ",
        item::RIGID => "[X]",
        item::BOMB => " o ",
        item::FOG => " ? ",
        item::EXTRABOMB => " b ",
        item::INCRRANGE => " r ",
        item::KICK => " k ",
        item::AGENTDUMMY => " A ",
        item::AGENT0 => " 0 ",
        item::AGENT1 => " 1 ",
        item::AGENT2 => " 2 ",
        item::AGENT3 => " 3 ",
        _ => "???",
    }
}

/// Render the grid followed by one status line per agent.
pub fn render_state(state: &State) -> String {
    let mut out = String::with_capacity((BOARD_SIZE + 2) * (BOARD_SIZE * 3 + 3) + 256);
    // Writing into a String cannot fail.
    let _ = write_state(&mut out, state);
    out
}

fn write_state(out: &mut impl fmt::Write, state: &State) -> fmt::Result {
    let border = "-".repeat(BOARD_SIZE * 3 + 2);
    writeln!(out, "{border}")?;
    for row in &state.board {
        out.write_char('|')?;
        for &cell in row {
            out.write_str(print_item(cell))?;
        }
        writeln!(out, "|")?;
    }
    writeln!(out, "{border}")?;
    writeln!(
        out,
        "tick {}  alive {}  bombs {}  flames {}",
        state.time_step,
        state.alive_agents,
        state.bombs.len(),
        state.flames.len()
    )?;
    for (id, a) in state.agents.iter().enumerate() {
        write!(
            out,
            "agent {id}: ({}, {})  bombs {}/{}  strength {}  kick {}",
            a.x,
            a.y,
            a.bomb_count,
            a.max_bomb_count,
            a.bomb_strength,
            if a.can_kick { "yes" } else { "no" }
        )?;
        if a.dead {
            out.write_str("  [dead]")?;
        }
        out.write_char('\n')?;
    }
    Ok(())
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_state(f, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_are_three_wide() {
        for cell in [
            item::PASSAGE,
            item::RIGID,
            item::wood(1),
            item::BOMB,
            item::flame(7, 1),
            item::FOG,
            item::KICK,
            item::AGENT2,
            -42,
        ] {
            assert_eq!(print_item(cell).len(), 3);
        }
    }

    #[test]
    fn render_shows_agents_and_status() {
        let mut s = State::new();
        s.put_agents_in_corners(0, 1, 2, 3);
        s.kill(2);
        let text = render_state(&s);
        assert!(text.starts_with("---"));
        assert!(text.contains("| 0 "));
        assert!(text.contains("agent 2: (10, 10)"));
        assert!(text.contains("[dead]"));
        assert_eq!(text, s.to_string());
    }
}
