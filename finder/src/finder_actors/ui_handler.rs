use crate::finder_actors::controller::RankedFeedController;
use crate::finder_actors::favorite_store::FavoriteStore;
use crate::messages::{Activate, GetFeed, ReconstructFavorites, ToggleFavorite, UserInput};
use crate::navigation::NavigationHandoff;
use crate::ranking::SortOrder;
use crate::views::{render_detail, render_favorites, render_help, render_list, render_map};
use actix::prelude::*;
use colored::Color;
use common::logger::Logger;
use common::types::position::Position;
use common::types::restaurant_record::RestaurantDetail;
use std::io::{self, BufRead};
use std::thread;
use tokio::sync::{mpsc, oneshot};
use tokio_stream::wrappers::UnboundedReceiverStream;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    List(Option<SortOrder>),
    Map,
    Favorite(u32),
    Favorites,
    Detail(u32),
    Navigate(u32),
    Reload,
    Help,
    Quit,
}

fn parse_id(command: &str, arg: Option<&str>) -> Result<u32, String> {
    let arg = arg.ok_or_else(|| format!("Usage: {} <id>", command))?;
    arg.parse::<u32>()
        .map_err(|_| format!("'{}' is not a restaurant number", arg))
}

pub fn parse_command(line: &str) -> Result<UiCommand, String> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Err("Type 'help' to see the available commands.".to_string());
    };
    let arg = words.next();
    match command.to_lowercase().as_str() {
        "list" | "ls" => arg
            .map(str::parse::<SortOrder>)
            .transpose()
            .map(UiCommand::List),
        "map" => Ok(UiCommand::Map),
        "fav" | "like" => parse_id(command, arg).map(UiCommand::Favorite),
        "favs" | "favorites" => Ok(UiCommand::Favorites),
        "detail" | "show" => parse_id(command, arg).map(UiCommand::Detail),
        "nav" | "go" => parse_id(command, arg).map(UiCommand::Navigate),
        "reload" => Ok(UiCommand::Reload),
        "help" | "?" => Ok(UiCommand::Help),
        "quit" | "exit" | "q" => Ok(UiCommand::Quit),
        other => Err(format!("Unknown command '{}'. Type 'help'.", other)),
    }
}

/// What running a command produced, applied back on the actor.
#[derive(Debug, Default)]
struct Outcome {
    screen: String,
    order: Option<SortOrder>,
    navigate_to: Option<Position>,
    quit: bool,
}

impl Outcome {
    fn screen(screen: String) -> Self {
        Self {
            screen,
            ..Self::default()
        }
    }
}

async fn execute(
    command: UiCommand,
    order: SortOrder,
    controller: Addr<RankedFeedController>,
    favorite_store: Addr<FavoriteStore>,
) -> Result<Outcome, String> {
    let outcome = match command {
        UiCommand::List(requested) => {
            let order = requested.unwrap_or(order);
            let feed = controller.send(GetFeed).await.map_err(|e| e.to_string())?;
            Outcome {
                screen: render_list(&feed, order),
                order: Some(order),
                ..Outcome::default()
            }
        }
        UiCommand::Map => {
            let feed = controller.send(GetFeed).await.map_err(|e| e.to_string())?;
            Outcome::screen(render_map(&feed))
        }
        UiCommand::Favorite(id) => {
            let feed = controller.send(GetFeed).await.map_err(|e| e.to_string())?;
            let name = feed
                .find(id)
                .map(|r| r.name.clone())
                .ok_or_else(|| format!("There is no restaurant #{}", id))?;
            let favorites = controller
                .send(ToggleFavorite { id })
                .await
                .map_err(|e| e.to_string())?;
            let screen = if favorites.contains(id) {
                format!("❤️ {} added to favorites\n", name)
            } else {
                format!("🤍 {} removed from favorites\n", name)
            };
            Outcome::screen(screen)
        }
        UiCommand::Favorites => {
            let records = favorite_store
                .send(ReconstructFavorites)
                .await
                .map_err(|e| e.to_string())?;
            Outcome::screen(render_favorites(&records))
        }
        UiCommand::Detail(id) => {
            let feed = controller.send(GetFeed).await.map_err(|e| e.to_string())?;
            let record = feed
                .find(id)
                .ok_or_else(|| format!("There is no restaurant #{}", id))?;
            Outcome::screen(render_detail(&RestaurantDetail::from(record)))
        }
        UiCommand::Navigate(id) => {
            let feed = controller.send(GetFeed).await.map_err(|e| e.to_string())?;
            let record = feed
                .find(id)
                .ok_or_else(|| format!("There is no restaurant #{}", id))?;
            Outcome {
                screen: format!("🚗 Navigating to {}\n", record.name),
                navigate_to: Some(record.position()),
                ..Outcome::default()
            }
        }
        UiCommand::Reload => {
            controller.send(Activate).await.map_err(|e| e.to_string())?;
            Outcome::screen("Reloading restaurants...\n".to_string())
        }
        UiCommand::Help => Outcome::screen(render_help()),
        UiCommand::Quit => Outcome {
            screen: "Bye!\n".to_string(),
            quit: true,
            ..Outcome::default()
        },
    };
    Ok(outcome)
}

/// Actor UIHandler: terminal front end for the restaurant finder.
///
/// Reads commands line by line, asks the controller and the favorite store,
/// and prints the resulting screen.
pub struct UIHandler {
    controller: Addr<RankedFeedController>,
    favorite_store: Addr<FavoriteStore>,
    navigation: Box<dyn NavigationHandoff>,
    order: SortOrder,
    /// Fired once when the user quits or input ends.
    shutdown: Option<oneshot::Sender<()>>,
    logger: Logger,
}

impl UIHandler {
    pub fn new(
        controller: Addr<RankedFeedController>,
        favorite_store: Addr<FavoriteStore>,
        navigation: Box<dyn NavigationHandoff>,
    ) -> Self {
        Self {
            controller,
            favorite_store,
            navigation,
            order: SortOrder::default(),
            shutdown: None,
            logger: Logger::new("UI", Color::White),
        }
    }

    pub fn with_shutdown(mut self, shutdown: oneshot::Sender<()>) -> Self {
        self.shutdown = Some(shutdown);
        self
    }

    fn request_shutdown(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }

    fn run(&mut self, line: String) -> ResponseActFuture<Self, String> {
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                self.logger.warn(&e);
                return Box::pin(actix::fut::ready(format!("{}\n", e)));
            }
        };

        Box::pin(
            execute(
                command,
                self.order,
                self.controller.clone(),
                self.favorite_store.clone(),
            )
            .into_actor(self)
            .map(|res, act, _ctx| match res {
                Ok(outcome) => {
                    if let Some(order) = outcome.order {
                        act.order = order;
                    }
                    if let Some(target) = outcome.navigate_to {
                        act.navigation.open(target.latitude, target.longitude);
                    }
                    print!("{}", outcome.screen);
                    if outcome.quit {
                        act.request_shutdown();
                    }
                    outcome.screen
                }
                Err(e) => {
                    act.logger.warn(&e);
                    format!("{}\n", e)
                }
            }),
        )
    }
}

impl Actor for UIHandler {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        self.logger.info("UIHandler started! Type 'help' for commands.");
    }
}

impl Handler<UserInput> for UIHandler {
    type Result = ResponseActFuture<Self, String>;

    fn handle(&mut self, msg: UserInput, _ctx: &mut Self::Context) -> Self::Result {
        self.run(msg.0)
    }
}

/// Reads lines on a dedicated thread and forwards them as a stream.
/// A read that is still blocked at shutdown does not hold the runtime open.
pub fn spawn_line_reader<R>(reader: R) -> UnboundedReceiverStream<io::Result<String>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();
    thread::spawn(move || {
        for line in reader.lines() {
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    UnboundedReceiverStream::new(rx)
}

impl StreamHandler<Result<String, io::Error>> for UIHandler {
    fn handle(&mut self, item: Result<String, io::Error>, ctx: &mut Self::Context) {
        match item {
            Ok(line) if line.trim().is_empty() => {}
            // One command at a time, in the order they were typed.
            Ok(line) => ctx.wait(self.run(line).map(|_, _, _| ())),
            Err(e) => self
                .logger
                .error(format!("Error while reading input: {}", e)),
        }
    }

    fn finished(&mut self, _ctx: &mut Self::Context) {
        self.logger.info("Input closed, shutting down.");
        self.request_shutdown();
    }
}
