use pinchview_core::Point;

/// Active touches in client coordinates, in list order.
pub fn touch_points(touches: &web_sys::TouchList) -> Vec<Point> {
    (0..touches.length())
        .filter_map(|i| touches.get(i))
        .map(|t| Point::new(t.client_x() as f64, t.client_y() as f64))
        .collect()
}
