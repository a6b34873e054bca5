//! Simulates a "press any input to bind" screen against scripted input.
//!
//! Run with `RUST_LOG=stickup_names=trace` to see every channel read.

use stickup_names::{
    BindingProfile, Joystick, Logged, NameCache, PollSettings, Poller, VirtualInput,
};
use tracing_subscriber::EnvFilter;

fn main() -> stickup_names::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let settings = PollSettings::from_toml_str("include_mouse_axes = true\ndeadzone = 0.25")?;
    let names = NameCache::new();
    let mut input = Logged::new(VirtualInput::new());

    // Frame 1: nothing held yet.
    {
        let poller = Poller::new(&names, &input);
        println!(
            "frame 1: button={} axis={}",
            poller.poll_button_with(&settings),
            poller.poll_axis_with(&settings)
        );
    }
    input.inner_mut().end_frame();

    // Frame 2: two axes moved and a button held.
    input.inner_mut().set_axis("JoyAll-Axis03", -0.7);
    input.inner_mut().set_axis("JoyAll-Axis05", 0.9);
    input.inner_mut().press_button("JoyAll-Button01");
    {
        let poller = Poller::new(&names, &input);
        if let Some((axis, value)) = poller.poll_axis_value_with(&settings) {
            println!("frame 2: axis {axis} moved to {value:+.2}");
        }
        println!("frame 2: all past half scale: {:?}", poller.poll_all_axes_with(&settings));
        println!("frame 2: button {}", poller.poll_button(Joystick::All));
    }

    let profile = BindingProfile::from_toml_str(
        r#"
        name = "demo"

        [[bindings]]
        action = "throttle"
        input = "Axis5"
        deadzone = 0.1

        [[bindings]]
        action = "jump"
        input = "Button1"
        "#,
    )?;
    let out = profile.resolve(&Poller::new(&names, &input));
    println!("actions: {:?}", out);
    println!("cached names: {}", names.len());

    Ok(())
}
