// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{self, Flags};
use iced_toast::toast::{DeviceClass, Position};

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();

    let position = match args.opt_value_from_str::<_, Position>("--position") {
        Ok(position) => position,
        Err(err) => {
            log::warn!("ignoring --position: {}", err);
            None
        }
    };
    let device_class = if args.contains("--tablet") {
        DeviceClass::Tablet
    } else {
        DeviceClass::Handheld
    };
    let config_dir = args.opt_value_from_str("--config-dir").unwrap_or_default();

    let flags = Flags {
        position,
        device_class,
        config_dir,
    };

    app::run(flags)
}
