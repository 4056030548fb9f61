//! Headless demo runner (default binary).
//!
//! Builds a small sample level, seeds one shooter per color from the grid
//! composition, then activates shooters in pool order and runs each to
//! completion, printing the event stream as it happens.

use anyhow::Result;

use pixel_blast::engine::{GameEvent, GameSession, LevelLayout};
use pixel_blast::types::Color;

fn main() -> Result<()> {
    let layout = sample_level();
    println!(
        "level: {}x{} grid, {} cells defined",
        layout.rows,
        layout.columns,
        layout.cells.len()
    );

    let grid = layout.build()?;
    let mut session = GameSession::new(grid);
    session.seed_shooters();
    session.subscribe(print_event);

    println!(
        "seeded {} shooters for {} pixels",
        session.pool().available().len(),
        session.total_pixels()
    );

    run(&mut session);

    println!(
        "done: {:.0}% cleared, {} pixels remaining, won: {}",
        session.completion_percentage(),
        session.remaining_pixels(),
        session.is_complete()
    );
    Ok(())
}

fn run(session: &mut GameSession) {
    // Always take the first available shooter; indices shift as shooters
    // retire, so position 0 is the next one in pool order.
    while !session.pool().available().is_empty() {
        if !session.select(0) || !session.activate_selected() {
            break;
        }
        let destroyed = session.execute_to_completion();
        println!("  run finished, {} pixels destroyed", destroyed.len());
    }
}

fn print_event(event: &GameEvent) {
    match event {
        GameEvent::ShooterActivated { color, ammo } => {
            println!("  [{}] shooter up with {} shots", color.as_str(), ammo);
        }
        GameEvent::PixelDestroyed { position } => {
            println!("    pixel destroyed at {}", position);
        }
        GameEvent::ShooterCompleted { color, destroyed } => {
            println!(
                "  [{}] shooter retired ({} in final step)",
                color.as_str(),
                destroyed.len()
            );
        }
        GameEvent::GameWon => {
            println!("  level cleared!");
        }
    }
}

fn sample_level() -> LevelLayout {
    LevelLayout::new(8, 8)
        .with_cell(1, 1, &[Color::Red])
        .with_cell(2, 3, &[Color::Blue, Color::Red])
        .with_cell(3, 3, &[Color::Blue])
        .with_cell(4, 5, &[Color::Green, Color::Green])
        .with_cell(2, 6, &[Color::Red, Color::Red])
}
