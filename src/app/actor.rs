//! App actor - message loop processing UI events and network responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
use crate::routes::Route;

/// App actor that processes UI events and network responses
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        state: AppState,
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state,
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop, starting on `start`
    pub async fn run(
        mut self,
        start: Route,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        let initial = self.state.navigate(start);
        self.dispatch(initial);
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = net_rx.recv() => {
                    tracing::debug!(id = response.id(), "Network response received");
                    let follow_up = self.state.handle_response(response);
                    self.dispatch(follow_up);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    fn dispatch(&self, cmd: Option<NetworkCommand>) {
        if let Some(cmd) = cmd {
            let _ = self.network_tx.send(cmd);
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        let cmd = match event {
            // Navigation bar
            UiEvent::Navigate(route) => self.state.navigate(route),
            UiEvent::ToggleDrawer => {
                self.state.toggle_drawer();
                None
            }
            UiEvent::CloseDrawer => {
                self.state.close_drawer();
                None
            }
            UiEvent::DrawerNext => {
                self.state.drawer_next();
                None
            }
            UiEvent::DrawerPrev => {
                self.state.drawer_prev();
                None
            }
            UiEvent::DrawerSelect => self.state.drawer_select(),

            // Form editing
            UiEvent::NextField => {
                self.state.next_field();
                None
            }
            UiEvent::PrevField => {
                self.state.prev_field();
                None
            }
            UiEvent::StartEditing => {
                self.state.start_editing();
                None
            }
            UiEvent::StopEditing => {
                self.state.stop_editing();
                None
            }
            UiEvent::CharInput(c) => {
                self.state.enter_char(c);
                None
            }
            UiEvent::Backspace => {
                self.state.delete_char();
                None
            }
            UiEvent::CursorLeft => {
                self.state.move_cursor_left();
                None
            }
            UiEvent::CursorRight => {
                self.state.move_cursor_right();
                None
            }
            UiEvent::Submit => self.state.submit(),
            UiEvent::DismissAlert => {
                self.state.dismiss_alert();
                None
            }

            // Review screen
            UiEvent::ScrollUp => {
                self.state.scroll_up();
                None
            }
            UiEvent::ScrollDown => {
                self.state.scroll_down();
                None
            }
            UiEvent::NextDocument => {
                self.state.next_document();
                None
            }
            UiEvent::PrevDocument => {
                self.state.prev_document();
                None
            }
            UiEvent::ViewDocument => {
                self.state.view_document();
                None
            }
            UiEvent::DownloadDocument => {
                self.state.download_document();
                None
            }
            UiEvent::AdmitStudent => self.state.admit_student(),
            UiEvent::RejectStudent => self.state.reject_student(),

            // Go-to popup
            UiEvent::OpenGoto => {
                self.state.open_goto();
                None
            }
            UiEvent::GotoChar(c) => {
                self.state.goto_char(c);
                None
            }
            UiEvent::GotoBackspace => {
                self.state.goto_backspace();
                None
            }
            UiEvent::ConfirmGoto => self.state.confirm_goto(),
            UiEvent::CancelGoto => {
                self.state.cancel_goto();
                None
            }

            // Popups
            UiEvent::ToggleHelp => {
                self.state.toggle_help();
                None
            }
            UiEvent::CloseHelp => {
                self.state.close_help();
                None
            }

            // System
            UiEvent::Quit => return true,
        };

        self.dispatch(cmd);
        false
    }
}
