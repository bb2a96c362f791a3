/// Repeating per-frame redraw task.
///
/// Implementations keep at most one callback in flight: `schedule` on an
/// already scheduled task is a no-op.
pub trait FrameScheduler {
    fn schedule(&mut self);
    fn cancel(&mut self);
    fn is_scheduled(&self) -> bool;
}
