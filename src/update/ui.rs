//! UI message handlers (status banner)

use std::time::Instant;

use crate::commands::Cmd;
use crate::messages::UiMsg;
use crate::model::AppModel;

/// Handle UI messages
pub fn update_ui(model: &mut AppModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::Tick => {
            if model.ui.expire_status(Instant::now()) {
                Some(Cmd::Redraw)
            } else {
                None
            }
        }
    }
}
