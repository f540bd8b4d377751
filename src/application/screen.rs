use log::{error, info};
use macroquad::prelude::*;

use crate::application::{Game, GameConfig, GameMode};
use crate::audio::AudioBank;
use crate::domain::{Position, RunHistory, WanderRule, all_rules, default_rule};
use crate::rendering;
use crate::ui::{BUTTON_HEIGHT, Button, SelectionList, axis_items, play_window_size};

const MENU_WINDOW: (f32, f32) = (360.0, 520.0);
const ABOUT_WINDOW: (f32, f32) = (480.0, 430.0);
const SUMMARY_WINDOW: (f32, f32) = (420.0, 440.0);

/// Screen is the finite state machine behind the whole application: one
/// named state per window the player can be on, with every transition made
/// by returning the next state from `update`. Hit-testing goes through the
/// widgets; no screen compares raw pixel rectangles.
pub enum Screen {
    MainMenu(MainMenu),
    About(About),
    Setup(Setup),
    Placement(Placement),
    Playing(Playing),
    Summary(Summary),
}

impl Screen {
    /// Entry state; greets the player
    pub fn main_menu(audio: &AudioBank) -> Self {
        Screen::MainMenu(MainMenu::new(audio))
    }

    /// Advance the active screen by one frame, following any transition it
    /// takes
    pub fn update(
        self,
        delta: f32,
        mouse: (f32, f32),
        history: &mut RunHistory,
        audio: &AudioBank,
    ) -> Self {
        match self {
            Screen::MainMenu(screen) => screen.update(mouse, audio),
            Screen::About(screen) => screen.update(mouse, audio),
            Screen::Setup(screen) => screen.update(mouse),
            Screen::Placement(screen) => screen.update(mouse),
            Screen::Playing(screen) => screen.update(delta, history, audio),
            Screen::Summary(screen) => screen.update(mouse, audio),
        }
    }

    pub fn draw(&self, mouse: (f32, f32), history: &RunHistory, art: Option<&Texture2D>) {
        match self {
            Screen::MainMenu(screen) => screen.draw(mouse, art),
            Screen::About(screen) => screen.draw(mouse),
            Screen::Setup(screen) => screen.draw(mouse),
            Screen::Placement(screen) => screen.draw(mouse),
            Screen::Playing(screen) => screen.draw(),
            Screen::Summary(screen) => screen.draw(mouse, history),
        }
    }
}

/// Build the wander rule the setup screen picked; index 0 is the default
/// for the bands that never see the choice
fn rule_for(index: usize) -> Box<dyn WanderRule> {
    all_rules()
        .into_iter()
        .nth(index)
        .map(|(_, rule)| rule)
        .unwrap_or_else(default_rule)
}

pub struct MainMenu {
    mode_buttons: Vec<(GameMode, Button)>,
    about_button: Button,
}

impl MainMenu {
    fn new(audio: &AudioBank) -> Self {
        let (w, h) = MENU_WINDOW;
        request_new_screen_size(w, h);
        audio.play_welcome();

        let mode_buttons = GameMode::all()
            .into_iter()
            .enumerate()
            .map(|(i, mode)| {
                let y = h - 144.0 + i as f32 * (BUTTON_HEIGHT + 8.0);
                (mode, Button::new(40.0, y, w - 80.0, BUTTON_HEIGHT, mode.label()))
            })
            .collect();

        Self {
            mode_buttons,
            about_button: Button::new(w - 90.0, 20.0, 70.0, 28.0, "About"),
        }
    }

    fn update(self, mouse: (f32, f32), audio: &AudioBank) -> Screen {
        if self.about_button.is_clicked(mouse) {
            return Screen::About(About::new());
        }

        for (mode, button) in &self.mode_buttons {
            if !button.is_clicked(mouse) {
                continue;
            }
            info!("main menu picked {}", mode.label());
            if mode.uses_setup() {
                return Screen::Setup(Setup::new(*mode, audio));
            }
            // K-2 skips setup entirely and plays the preset woods
            match Playing::new(*mode, GameConfig::k_through_2(), 0) {
                Ok(playing) => return Screen::Playing(playing),
                Err(err) => error!("preset configuration rejected: {err}"),
            }
        }

        Screen::MainMenu(self)
    }

    fn draw(&self, mouse: (f32, f32), art: Option<&Texture2D>) {
        let (w, _) = MENU_WINDOW;

        if let Some(texture) = art {
            draw_texture_ex(
                texture,
                (w - 240.0) / 2.0,
                60.0,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(240.0, 170.0)),
                    ..Default::default()
                },
            );
        }

        let title = [("Wandering", 250.0), ("in the", 290.0), ("Woods", 330.0)];
        for (line, y) in title {
            let size = measure_text(line, None, 40, 1.0);
            draw_text(line, (w - size.width) / 2.0, y, 40.0, WHITE);
        }

        self.about_button.draw(mouse);
        for (_, button) in &self.mode_buttons {
            button.draw(mouse);
        }
    }
}

pub struct About {
    back_button: Button,
}

impl About {
    fn new() -> Self {
        let (w, h) = ABOUT_WINDOW;
        request_new_screen_size(w, h);
        Self {
            back_button: Button::new(w - 120.0, 20.0, 100.0, 28.0, "Main Menu"),
        }
    }

    fn update(self, mouse: (f32, f32), audio: &AudioBank) -> Screen {
        if self.back_button.is_clicked(mouse) {
            return Screen::main_menu(audio);
        }
        Screen::About(self)
    }

    fn draw(&self, mouse: (f32, f32)) {
        self.back_button.draw(mouse);

        let about = [
            "Wandering in the Woods is a game where lost friends",
            "try to find each other in the dark and ominous woods.",
            "Each wanderer drifts one cell at a time; when two meet",
            "they join hands and wander on together.",
        ];
        let how_to_play = [
            "How to Play:",
            "1. Pick a grade band from the main menu.",
            "2. K Through 2 drops two friends straight into the woods.",
            "3. Older bands choose the woods, the party, and where",
            "   everyone starts - 6 Through 8 also picks the walk.",
            "4. Watch until every friend has been found.",
            "5. The summary compares this run with earlier ones.",
        ];

        let mut y = 80.0;
        for line in about {
            draw_text(line, 25.0, y, 18.0, WHITE);
            y += 24.0;
        }
        y += 20.0;
        for line in how_to_play {
            draw_text(line, 25.0, y, 18.0, LIGHTGRAY);
            y += 26.0;
        }
    }
}

pub struct Setup {
    mode: GameMode,
    width_list: SelectionList,
    height_list: SelectionList,
    players_list: SelectionList,
    rule_list: Option<SelectionList>,
    continue_button: Button,
    hint: Option<&'static str>,
}

impl Setup {
    fn new(mode: GameMode, audio: &AudioBank) -> Self {
        use crate::application::config::{MAX_AXIS, MAX_PLAYERS, MIN_PLAYERS};

        let window_w = if mode.picks_wander_rule() { 620.0 } else { 440.0 };
        request_new_screen_size(window_w, 360.0);
        audio.play_select();

        let party: Vec<String> = (MIN_PLAYERS..=MAX_PLAYERS).map(|n| n.to_string()).collect();
        let rule_list = mode.picks_wander_rule().then(|| {
            let names = all_rules().into_iter().map(|(name, _)| name.to_string());
            SelectionList::new(400.0, 70.0, 190.0, "Wander Walk", names.collect())
        });

        Self {
            mode,
            width_list: SelectionList::new(25.0, 70.0, 110.0, "Grid Width", axis_items(MAX_AXIS)),
            height_list: SelectionList::new(150.0, 70.0, 110.0, "Grid Height", axis_items(MAX_AXIS)),
            players_list: SelectionList::new(275.0, 70.0, 110.0, "# of Players", party),
            rule_list,
            continue_button: Button::new(window_w - 135.0, 280.0, 110.0, BUTTON_HEIGHT, "Continue"),
            hint: None,
        }
    }

    fn update(mut self, mouse: (f32, f32)) -> Screen {
        self.width_list.update(mouse);
        self.height_list.update(mouse);
        self.players_list.update(mouse);
        if let Some(list) = &mut self.rule_list {
            list.update(mouse);
        }

        if self.continue_button.is_clicked(mouse) {
            let picks = (
                self.width_list.selected(),
                self.height_list.selected(),
                self.players_list.selected(),
            );
            if let (Some(w), Some(h), Some(p)) = picks {
                // The rule list defaults instead of blocking: the uniform
                // walk is the one the younger bands always get
                let rule_index = self
                    .rule_list
                    .as_ref()
                    .and_then(SelectionList::selected)
                    .unwrap_or(0);
                return Screen::Placement(Placement::new(
                    self.mode,
                    (w + 1) as u32,
                    (h + 1) as u32,
                    p + crate::application::config::MIN_PLAYERS,
                    rule_index,
                ));
            }
            self.hint = Some("Pick a width, a height, and a party size first");
        }

        Screen::Setup(self)
    }

    fn draw(&self, mouse: (f32, f32)) {
        draw_text(
            &format!("{} - choose the woods", self.mode.label()),
            25.0,
            35.0,
            22.0,
            WHITE,
        );

        self.width_list.draw(mouse);
        self.height_list.draw(mouse);
        self.players_list.draw(mouse);
        if let Some(list) = &self.rule_list {
            list.draw(mouse);
        }
        self.continue_button.draw(mouse);

        if let Some(hint) = self.hint {
            draw_text(hint, 25.0, 345.0, 16.0, YELLOW);
        }
    }
}

pub struct Placement {
    mode: GameMode,
    grid_width: u32,
    grid_height: u32,
    rule_index: usize,
    coord_lists: Vec<(SelectionList, SelectionList)>,
    start_button: Button,
    message: Option<String>,
    window: (f32, f32),
}

impl Placement {
    const ROW_STRIDE: f32 = 145.0;

    fn new(
        mode: GameMode,
        grid_width: u32,
        grid_height: u32,
        player_count: usize,
        rule_index: usize,
    ) -> Self {
        let window = (
            420.0,
            90.0 + player_count as f32 * Self::ROW_STRIDE + 70.0,
        );
        request_new_screen_size(window.0, window.1);

        let coord_lists = (0..player_count)
            .map(|i| {
                let y = 90.0 + i as f32 * Self::ROW_STRIDE;
                (
                    SelectionList::new(140.0, y, 110.0, "Column", axis_items(grid_width))
                        .with_visible_rows(4),
                    SelectionList::new(270.0, y, 110.0, "Row", axis_items(grid_height))
                        .with_visible_rows(4),
                )
            })
            .collect();

        Self {
            mode,
            grid_width,
            grid_height,
            rule_index,
            coord_lists,
            start_button: Button::new(
                window.0 - 135.0,
                window.1 - 60.0,
                110.0,
                BUTTON_HEIGHT,
                "Start!",
            ),
            message: None,
            window,
        }
    }

    fn update(mut self, mouse: (f32, f32)) -> Screen {
        for (x_list, y_list) in &mut self.coord_lists {
            x_list.update(mouse);
            y_list.update(mouse);
        }

        if self.start_button.is_clicked(mouse) {
            match self.collect_starts() {
                Some(starts) => {
                    let config = GameConfig::new(self.grid_width, self.grid_height, starts);
                    match Playing::new(self.mode, config, self.rule_index) {
                        Ok(playing) => return Screen::Playing(playing),
                        // Same spot the original showed "coordinates
                        // cannot match"; any validation failure lands here
                        Err(err) => self.message = Some(err.to_string()),
                    }
                }
                None => self.message = Some("Place every player first".to_string()),
            }
        }

        Screen::Placement(self)
    }

    /// Starting cells picked so far; None until every list has a choice
    fn collect_starts(&self) -> Option<Vec<Position>> {
        self.coord_lists
            .iter()
            .map(|(x_list, y_list)| {
                let x = x_list.selected()? as u32;
                let y = y_list.selected()? as u32;
                Some(Position::new(x, y))
            })
            .collect()
    }

    fn draw(&self, mouse: (f32, f32)) {
        draw_text("Where does everyone start?", 25.0, 35.0, 22.0, WHITE);
        draw_text(
            &format!("The woods are {} wide and {} tall", self.grid_width, self.grid_height),
            25.0,
            58.0,
            16.0,
            LIGHTGRAY,
        );

        for (i, (x_list, y_list)) in self.coord_lists.iter().enumerate() {
            let y = 90.0 + i as f32 * Self::ROW_STRIDE;
            let color = rendering::to_color(crate::domain::PLAYER_PALETTE[i]);
            draw_text(&format!("Player {}", i + 1), 25.0, y + 16.0, 20.0, color);
            x_list.draw(mouse);
            y_list.draw(mouse);
        }

        self.start_button.draw(mouse);
        if let Some(message) = &self.message {
            draw_text(message, 25.0, self.window.1 - 30.0, 16.0, YELLOW);
        }
    }
}

pub struct Playing {
    game: Game,
    config: GameConfig,
    rule_index: usize,
}

impl Playing {
    fn new(
        mode: GameMode,
        config: GameConfig,
        rule_index: usize,
    ) -> Result<Self, crate::application::ConfigError> {
        let game = Game::new(mode, &config, rule_for(rule_index))?;
        let (w, h) = play_window_size(&game.grid);
        request_new_screen_size(w, h);
        Ok(Self {
            game,
            config,
            rule_index,
        })
    }

    fn update(mut self, delta: f32, history: &mut RunHistory, audio: &AudioBank) -> Screen {
        self.game.tick(delta);

        if self.game.is_over() {
            history.record(self.game.stats.elapsed());
            return Screen::Summary(Summary::new(self, audio));
        }
        Screen::Playing(self)
    }

    fn draw(&self) {
        rendering::draw_grid(&self.game.grid);
        rendering::draw_players(&self.game.players, &self.game.groups, &self.game.grid);
        rendering::draw_hud(&self.game);
    }
}

pub struct Summary {
    mode: GameMode,
    config: GameConfig,
    rule_index: usize,
    duration: f64,
    steps: u64,
    play_again_button: Button,
    menu_button: Button,
}

impl Summary {
    fn new(finished: Playing, audio: &AudioBank) -> Self {
        let (w, h) = SUMMARY_WINDOW;
        request_new_screen_size(w, h);
        audio.play_reunion();

        Self {
            mode: finished.game.mode,
            config: finished.config,
            rule_index: finished.rule_index,
            duration: finished.game.stats.elapsed(),
            steps: finished.game.stats.steps(),
            play_again_button: Button::new(40.0, h - 80.0, 150.0, BUTTON_HEIGHT, "Play Again"),
            menu_button: Button::new(w - 190.0, h - 80.0, 150.0, BUTTON_HEIGHT, "Main Menu"),
        }
    }

    fn update(self, mouse: (f32, f32), audio: &AudioBank) -> Screen {
        if self.play_again_button.is_clicked(mouse) {
            // Same woods, same party, fresh wandering
            match Playing::new(self.mode, self.config.clone(), self.rule_index) {
                Ok(playing) => return Screen::Playing(playing),
                Err(err) => error!("replay configuration rejected: {err}"),
            }
        }
        if self.menu_button.is_clicked(mouse) {
            return Screen::main_menu(audio);
        }
        Screen::Summary(self)
    }

    fn draw(&self, mouse: (f32, f32), history: &RunHistory) {
        let headline = "Everyone found each other!";
        let size = measure_text(headline, None, 28, 1.0);
        draw_text(headline, (SUMMARY_WINDOW.0 - size.width) / 2.0, 70.0, 28.0, WHITE);

        let mut lines = vec![
            format!("This run took {:.1}s over {} steps", self.duration, self.steps),
        ];
        if self.mode.shows_history() {
            let fmt = |value: Option<f64>| {
                value.map_or_else(|| "-".to_string(), |v| format!("{v:.1}s"))
            };
            lines.push(format!("Runs so far: {}", history.runs()));
            lines.push(format!("Longest: {}", fmt(history.longest())));
            lines.push(format!("Shortest: {}", fmt(history.shortest())));
            lines.push(format!("Average: {}", fmt(history.average())));
        }

        let mut y = 130.0;
        for line in &lines {
            draw_text(line, 50.0, y, 20.0, LIGHTGRAY);
            y += 30.0;
        }

        self.play_again_button.draw(mouse);
        self.menu_button.draw(mouse);
    }
}
