use astar::{util::read_board, Grid, Search, SearchState};
use log::debug;

use config::Config;

mod config;

/// Turn the outcome of a search into the text printed to the console.
///
/// A failed search prints the message followed by the empty board.
fn render(state: &SearchState, mut grid: Grid, mark_endpoints: bool) -> String {
    match state {
        SearchState::Succeeded(result) => {
            debug!("{:?}", result);
            if mark_endpoints {
                result.mark_endpoints(&mut grid);
            }
            grid.to_string()
        }
        _ => format!("No path found!\n{}", Grid::default()),
    }
}

fn main() -> Result<(), anyhow::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::from_env()?;
    debug!("{:?}", config);

    let grid = read_board(&config.board)?;

    let (state, grid) = Search::new(config.start, config.goal, grid).finish();

    print!("{}", render(&state, grid, config.mark_endpoints));

    Ok(())
}
