use crate::geometry::{Rect, Size};

/// The resizable drawing target.
pub trait Surface {
    /// Current backing-store size in pixels.
    fn size(&self) -> Size;
    fn set_size(&mut self, size: Size);
    /// On-screen box in client coordinates, used to translate touch points.
    fn bounding_box(&self) -> Rect;
}
