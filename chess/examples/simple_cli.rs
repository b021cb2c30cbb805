// Simple command-line application to play against random moves

use clap::{Parser, ValueEnum};
use gridchess::{board::PrettyStyle, Board, Color, Game, GameConfig, Move, RandomMover};
use gridchess::game::NoListener;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Human {
    White,
    Black,
    None,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Style {
    Ascii,
    Utf8,
}

#[derive(Debug, Parser)]
#[command(about = "Play pseudo-legal chess against a random mover")]
struct Args {
    /// Seed for the random mover, taken from the OS if not set
    #[arg(long)]
    seed: Option<u64>,

    /// Side played from the keyboard
    #[arg(long, value_enum, default_value_t = Human::White)]
    human: Human,

    /// How to draw the board
    #[arg(long, value_enum, default_value_t = Style::Ascii)]
    style: Style,

    /// Stop after this many moves
    #[arg(long, default_value_t = 200)]
    max_plies: u32,
}

fn side_name(c: Color) -> &'static str {
    match c {
        Color::White => "White",
        Color::Black => "Black",
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let automated = match args.human {
        Human::White => Some(Color::Black),
        Human::Black => Some(Color::White),
        Human::None => None,
    };
    let style = match args.style {
        Style::Ascii => PrettyStyle::Ascii,
        Style::Utf8 => PrettyStyle::Utf8,
    };
    let mut mover = match args.seed {
        Some(seed) => RandomMover::seeded(seed),
        None => RandomMover::from_entropy(),
    };
    let mut game = Game::new(
        Board::initial(),
        Color::White,
        GameConfig { automated },
        NoListener,
    );
    let mut stdin = io::stdin().lock();

    while game.ply() < args.max_plies {
        println!("{}", game.board().pretty(style));
        let human = args.human != Human::None && !game.is_automated_turn();

        if !human {
            match mover.play(&mut game) {
                Some(ev) => println!("{} plays {}", side_name(ev.side.inv()), ev.mv),
                None => {
                    println!("{} has no moves", side_name(game.side()));
                    break;
                }
            }
            println!();
            continue;
        }

        print!("{} move ({}): ", side_name(game.side()), game.ply() + 1);
        io::stdout().flush().unwrap();
        let mut s = String::new();
        if stdin.read_line(&mut s).unwrap() == 0 {
            break;
        }
        let mv = match Move::from_text(s.trim()) {
            Ok(mv) => mv,
            Err(e) => {
                println!("Bad move: {}", e);
                println!();
                continue;
            }
        };
        if let Err(e) = game.commit(mv) {
            println!("Illegal move: {}", e);
        }
        println!();
    }

    println!(
        "Material: white {}, black {}",
        game.board().material(Color::White),
        game.board().material(Color::Black)
    );
}
