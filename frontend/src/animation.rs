use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};

type FrameCallback = Rc<RefCell<dyn FnMut(f64) -> bool>>;

/// requestAnimationFrame loop. `on_frame` gets the milliseconds since the
/// first frame and returns whether to keep going. Dropping the loop cancels
/// the pending frame.
pub struct FrameLoop {
    pending: Rc<RefCell<Option<AnimationFrame>>>,
}

impl FrameLoop {
    pub fn start<F>(on_frame: F) -> Self
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let pending = Rc::new(RefCell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(on_frame));
        schedule(pending.clone(), callback, Rc::new(Cell::new(None)));
        Self { pending }
    }
}

fn schedule(
    pending: Rc<RefCell<Option<AnimationFrame>>>,
    callback: FrameCallback,
    first_frame: Rc<Cell<Option<f64>>>,
) {
    let next = pending.clone();
    let frame = request_animation_frame(move |timestamp| {
        let started = first_frame.get().unwrap_or(timestamp);
        first_frame.set(Some(started));

        let keep_going = (callback.borrow_mut())(timestamp - started);
        if keep_going {
            schedule(next, callback, first_frame);
        }
    });
    *pending.borrow_mut() = Some(frame);
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.pending.borrow_mut().take();
    }
}
