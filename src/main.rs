// SPDX-License-Identifier: MPL-2.0
use mood_picker::app;

fn main() -> iced::Result {
    app::run()
}
