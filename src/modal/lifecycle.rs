use egui::Rect;

/// Where drag initialization stands for the current open cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum InitState {
    /// Dialog closed, or open without a header to grab.
    #[default]
    Inactive,
    /// Open, waiting for the content rect to be measured. Counts down a
    /// bounded number of frames before giving up.
    Pending { retries_left: u8 },
    /// Header located and drag handling armed.
    Armed,
    /// Retry budget exhausted without a measured rect; the dialog stays
    /// static until the next open cycle.
    GaveUp,
}

/// Open/close observation and deferred drag initialization.
///
/// The content `Area` only has a measured rectangle one frame after it first
/// shows, so dragging arms with bounded per-frame retries instead of a fixed
/// delay. A dialog without a header never arms.
#[derive(Clone, Copy, Debug, Default)]
pub(super) struct Lifecycle {
    was_open: bool,
    state: InitState,
}

impl Lifecycle {
    /// Observes the visibility flag for this frame.
    ///
    /// Returns true when the dialog just transitioned closed → open, which
    /// re-arms initialization; the caller must reset the translation offset
    /// on that edge.
    pub(super) fn observe_open(&mut self, open: bool, has_header: bool, retry_budget: u8) -> bool {
        let reopened = open && !self.was_open;
        self.was_open = open;

        if !open {
            self.state = InitState::Inactive;
            return false;
        }

        if reopened {
            self.state = if has_header {
                InitState::Pending {
                    retries_left: retry_budget,
                }
            } else {
                InitState::Inactive
            };
        }

        reopened
    }

    /// Feeds the content rect measured on a previous frame, if any.
    /// Returns whether drag handling is armed for this frame.
    pub(super) fn observe_content_rect(&mut self, measured: Option<Rect>) -> bool {
        match self.state {
            InitState::Pending { retries_left } => {
                if measured.is_some() {
                    self.state = InitState::Armed;
                    true
                } else if retries_left == 0 {
                    // Silent degradation: the dialog renders but stays static.
                    log::debug!("modal content never measured; drag stays inactive this open cycle");
                    self.state = InitState::GaveUp;
                    false
                } else {
                    self.state = InitState::Pending {
                        retries_left: retries_left - 1,
                    };
                    false
                }
            }
            InitState::Armed => true,
            InitState::Inactive | InitState::GaveUp => false,
        }
    }

    pub(super) fn is_armed(&self) -> bool {
        self.state == InitState::Armed
    }
}
