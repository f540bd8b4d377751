use log::warn;
use macroquad::prelude::*;
use wandering_woods::{RunHistory, Screen, audio::AudioBank};

fn window_conf() -> Conf {
    Conf {
        window_title: "Wandering in the Woods".to_owned(),
        window_width: 360,
        window_height: 520,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    // Decorative art and spoken prompts are both best-effort: the game is
    // fully playable with neither.
    let audio = AudioBank::load("assets/audio").await;
    let menu_art = match load_texture("assets/woods.png").await {
        Ok(texture) => Some(texture),
        Err(err) => {
            warn!("menu art unavailable, continuing without it: {err:?}");
            None
        }
    };

    // Run history lives for the process; every finished run lands in it
    let mut history = RunHistory::new();
    let mut screen = Screen::main_menu(&audio);

    loop {
        let mouse = mouse_position();
        screen = screen.update(get_frame_time(), mouse, &mut history, &audio);

        clear_background(Color::from_rgba(16, 22, 14, 255));
        screen.draw(mouse, &history, menu_art.as_ref());

        next_frame().await;
    }
}
