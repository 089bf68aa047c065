use crate::core::data::point::Point;
use std::time::{Duration, Instant};

/// Longest gap between two clicks that still counts as a double click.
pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(300);

/// How far, in pixels along either axis, the second click may land from the
/// first one.
pub const DOUBLE_CLICK_SLOP: i32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    DragStart(Point),
    DragEnd(Point),
    DoubleClick(Point),
}

/// Turns raw cursor and left-button events into explorer gestures.
///
/// Every press starts a drag and a release ends it. A release that
/// completes a second quick click at the same spot yields a double click
/// instead, so the small jitter between the two clicks never pans.
#[derive(Debug, Default)]
pub struct MouseGestures {
    cursor: Point,
    pressed: bool,
    last_click: Option<(Instant, Point)>,
}

impl MouseGestures {
    pub fn cursor_moved(&mut self, at: Point) {
        self.cursor = at;
    }

    pub fn press(&mut self) -> Option<Gesture> {
        if self.pressed {
            return None;
        }

        self.pressed = true;
        Some(Gesture::DragStart(self.cursor))
    }

    pub fn release(&mut self, now: Instant) -> Option<Gesture> {
        if !self.pressed {
            return None;
        }
        self.pressed = false;

        let at = self.cursor;

        Some(match self.last_click.take() {
            Some((then, first))
                if now.duration_since(then) <= DOUBLE_CLICK_WINDOW && is_near(first, at) =>
            {
                Gesture::DoubleClick(at)
            }
            _ => {
                self.last_click = Some((now, at));
                Gesture::DragEnd(at)
            }
        })
    }
}

fn is_near(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() <= DOUBLE_CLICK_SLOP && (a.y - b.y).abs() <= DOUBLE_CLICK_SLOP
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click(gestures: &mut MouseGestures, at: Point, now: Instant) -> Option<Gesture> {
        gestures.cursor_moved(at);
        gestures.press();
        gestures.release(now)
    }

    #[test]
    fn test_press_and_release_make_a_drag() {
        let mut gestures = MouseGestures::default();
        gestures.cursor_moved(Point::new(10, 10));

        assert_eq!(gestures.press(), Some(Gesture::DragStart(Point::new(10, 10))));
        assert_eq!(gestures.press(), None);

        gestures.cursor_moved(Point::new(40, 25));
        assert_eq!(
            gestures.release(Instant::now()),
            Some(Gesture::DragEnd(Point::new(40, 25)))
        );
        assert_eq!(gestures.release(Instant::now()), None);
    }

    #[test]
    fn test_two_quick_clicks_make_a_double_click() {
        let mut gestures = MouseGestures::default();
        let start = Instant::now();

        click(&mut gestures, Point::new(100, 50), start);
        let second = click(
            &mut gestures,
            Point::new(102, 49),
            start + Duration::from_millis(150),
        );

        // the jitter between the clicks is not reported as a drag
        assert_eq!(second, Some(Gesture::DoubleClick(Point::new(102, 49))));
    }

    #[test]
    fn test_jitter_inside_second_click_does_not_pan() {
        let mut gestures = MouseGestures::default();
        let start = Instant::now();

        click(&mut gestures, Point::new(60, 60), start);
        gestures.cursor_moved(Point::new(61, 60));
        assert_eq!(gestures.press(), Some(Gesture::DragStart(Point::new(61, 60))));
        gestures.cursor_moved(Point::new(64, 63));

        assert_eq!(
            gestures.release(start + Duration::from_millis(200)),
            Some(Gesture::DoubleClick(Point::new(64, 63)))
        );
    }

    #[test]
    fn test_slow_or_distant_clicks_stay_single() {
        let mut gestures = MouseGestures::default();
        let start = Instant::now();

        click(&mut gestures, Point::new(100, 50), start);
        let slow = click(&mut gestures, Point::new(100, 50), start + Duration::from_millis(400));
        assert_eq!(slow, Some(Gesture::DragEnd(Point::new(100, 50))));

        let far = click(&mut gestures, Point::new(150, 50), start + Duration::from_millis(450));
        assert_eq!(far, Some(Gesture::DragEnd(Point::new(150, 50))));
    }

    #[test]
    fn test_third_click_starts_a_new_pair() {
        let mut gestures = MouseGestures::default();
        let start = Instant::now();
        let at = Point::new(5, 5);

        click(&mut gestures, at, start);
        assert_eq!(
            click(&mut gestures, at, start + Duration::from_millis(100)),
            Some(Gesture::DoubleClick(at))
        );
        assert_eq!(
            click(&mut gestures, at, start + Duration::from_millis(200)),
            Some(Gesture::DragEnd(at))
        );
    }
}
