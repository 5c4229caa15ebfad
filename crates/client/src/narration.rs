//! Turn-by-turn combat narration.

use std::io::{self, Write};

use game_core::{AttackReport, AttackStyle, Character, TurnRecord};

const TURN_RULE: &str = "------------------------------";

/// Writes character sheets and duel narration to a text stream.
pub struct Narrator<W: Write> {
    out: W,
}

impl<W: Write> Narrator<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn banner(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "\n>>> {text} <<<\n")
    }

    pub fn sheet(&mut self, character: &Character) -> io::Result<()> {
        write!(self.out, "{}", character.sheet())
    }

    /// Narrate one turn. `attacker` names the acting combatant.
    pub fn turn(&mut self, record: &TurnRecord, attacker: &str) -> io::Result<()> {
        writeln!(self.out, "--- {attacker}'s turn ---")?;
        match &record.report {
            Some(report) => self.attack(report)?,
            None => writeln!(self.out, "{attacker} does not know how to attack!")?,
        }
        writeln!(self.out, "{TURN_RULE}")
    }

    fn attack(&mut self, report: &AttackReport) -> io::Result<()> {
        let AttackReport {
            attacker, target, ..
        } = report;

        match report.style {
            AttackStyle::Armed => {
                let weapon = report.weapon.as_deref().unwrap_or("a weapon");
                writeln!(self.out, "{attacker} attacks with {weapon}!")?;
            }
            AttackStyle::Unarmed => writeln!(self.out, "{attacker} attacks with bare fists!")?,
            AttackStyle::Arcane => writeln!(self.out, "{attacker} casts a fireball at {target}!")?,
            AttackStyle::Other => writeln!(self.out, "{attacker} attacks {target}!")?,
        }

        writeln!(
            self.out,
            "-> {target} takes {} damage! Health: {}/{}",
            report.applied,
            report.target_health.max(0),
            report.target_max_health
        )?;
        if report.target_defeated {
            writeln!(self.out, "-> {target} has been defeated!")?;
        }
        Ok(())
    }

    pub fn winner(&mut self, winner: &Character) -> io::Result<()> {
        writeln!(self.out, "The champion is {}!", winner.name)?;
        self.sheet(winner)
    }

    pub fn stalemate(&mut self, turns: u32) -> io::Result<()> {
        writeln!(self.out, "No champion emerged after {turns} turns.")
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
