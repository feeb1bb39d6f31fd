use super::*;
use std::cell::Cell;
use std::rc::Rc;

/// Timer stand-in that tracks how many handles are alive.
struct FakeTimer {
    period: u32,
    live: Rc<Cell<usize>>,
}

impl Drop for FakeTimer {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

fn armer(live: &Rc<Cell<usize>>) -> impl FnOnce(NonZeroU32) -> FakeTimer {
    let live = live.clone();
    move |period| {
        live.set(live.get() + 1);
        FakeTimer {
            period: period.get(),
            live,
        }
    }
}

fn images(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("/uploads/banner_{i}.jpg")).collect()
}

#[test]
fn next_wraps_back_to_start() {
    let mut carousel: Carousel<FakeTimer> = Carousel::new(images(4), CarouselConfig::default());
    for _ in 0..4 {
        assert!(carousel.next());
    }
    assert_eq!(carousel.current_index(), Some(0));
}

#[test]
fn previous_from_first_goes_to_last() {
    let mut carousel: Carousel<FakeTimer> = Carousel::new(images(3), CarouselConfig::default());
    assert!(carousel.previous());
    assert_eq!(carousel.current_index(), Some(2));
    assert_eq!(carousel.current_image(), Some("/uploads/banner_2.jpg"));
}

#[test]
fn empty_carousel_is_a_placeholder() {
    let live = Rc::new(Cell::new(0));
    let mut carousel = Carousel::new(Vec::new(), CarouselConfig::default());

    assert_eq!(carousel.mode(), CarouselMode::Empty);
    assert_eq!(carousel.current_index(), None);
    assert!(!carousel.next());
    assert!(!carousel.previous());
    assert!(!carousel.start(armer(&live)));
    assert!(!carousel.is_armed());
    assert_eq!(live.get(), 0);
    assert_eq!(carousel.indicators().count(), 0);
}

#[test]
fn single_image_never_rotates() {
    let live = Rc::new(Cell::new(0));
    let mut carousel = Carousel::new(images(1), CarouselConfig::default());

    assert_eq!(carousel.mode(), CarouselMode::Static);
    assert!(!carousel.start(armer(&live)));
    assert!(!carousel.next());
    assert!(!carousel.previous());
    assert!(!carousel.tick());
    assert_eq!(carousel.current_index(), Some(0));
    assert_eq!(live.get(), 0);
}

#[test]
fn jump_to_rejects_out_of_range() {
    let mut carousel: Carousel<FakeTimer> = Carousel::new(images(3), CarouselConfig::default());
    assert_eq!(carousel.jump_to(2), Ok(true));
    assert_eq!(carousel.jump_to(2), Ok(false));
    assert_eq!(
        carousel.jump_to(3),
        Err(CarouselError::IndexOutOfRange { index: 3, len: 3 })
    );
    assert_eq!(carousel.current_index(), Some(2));

    let mut empty: Carousel<FakeTimer> = Carousel::new(Vec::new(), CarouselConfig::default());
    assert!(empty.jump_to(0).is_err());
}

#[test]
fn start_arms_a_single_timer() {
    let live = Rc::new(Cell::new(0));
    let mut carousel = Carousel::new(images(3), CarouselConfig::new(true, 3000));

    assert!(carousel.start(armer(&live)));
    assert!(!carousel.start(armer(&live)));
    assert_eq!(live.get(), 1);
    assert_eq!(carousel.timer.as_ref().map(|t| t.period), Some(3000));

    assert!(carousel.tick());
    assert_eq!(carousel.current_index(), Some(1));
}

#[test]
fn auto_play_off_arms_nothing() {
    let live = Rc::new(Cell::new(0));
    let mut carousel = Carousel::new(images(3), CarouselConfig::new(false, 3000));
    assert!(!carousel.start(armer(&live)));
    assert!(!carousel.tick());
    assert_eq!(carousel.current_index(), Some(0));
    assert_eq!(live.get(), 0);
}

#[test]
fn stop_disarms_and_ignores_late_ticks() {
    let live = Rc::new(Cell::new(0));
    let mut carousel = Carousel::new(images(3), CarouselConfig::default());
    carousel.start(armer(&live));

    assert!(carousel.stop());
    assert_eq!(live.get(), 0);
    assert!(!carousel.tick());
    assert_eq!(carousel.current_index(), Some(0));
    assert!(!carousel.stop());
}

#[test]
fn changing_interval_leaves_exactly_one_timer() {
    let live = Rc::new(Cell::new(0));
    let mut carousel = Carousel::new(images(3), CarouselConfig::new(true, 5000));
    carousel.start(armer(&live));
    carousel.next();

    assert!(carousel.reconfigure(images(3), CarouselConfig::new(true, 2000), armer(&live)));
    assert_eq!(live.get(), 1);
    assert_eq!(carousel.timer.as_ref().map(|t| t.period), Some(2000));
    assert_eq!(carousel.current_index(), Some(1));
}

#[test]
fn identical_reconfiguration_does_not_rearm() {
    let live = Rc::new(Cell::new(0));
    let mut carousel = Carousel::new(images(2), CarouselConfig::default());
    carousel.start(armer(&live));

    for _ in 0..5 {
        assert!(!carousel.reconfigure(images(2), CarouselConfig::default(), armer(&live)));
    }
    assert_eq!(live.get(), 1);
}

#[test]
fn new_images_reset_focus_and_mode() {
    let live = Rc::new(Cell::new(0));
    let mut carousel = Carousel::new(images(3), CarouselConfig::default());
    carousel.start(armer(&live));
    carousel.jump_to(2).unwrap();

    assert!(carousel.reconfigure(images(1), CarouselConfig::default(), armer(&live)));
    assert_eq!(carousel.mode(), CarouselMode::Static);
    assert_eq!(carousel.current_index(), Some(0));
    assert_eq!(live.get(), 0);

    assert!(carousel.reconfigure(images(4), CarouselConfig::default(), armer(&live)));
    assert!(carousel.is_armed());
    assert_eq!(live.get(), 1);
}

#[test]
fn reconfigure_before_mount_arms_nothing() {
    let live = Rc::new(Cell::new(0));
    let mut carousel = Carousel::new(images(0), CarouselConfig::default());
    assert!(carousel.reconfigure(images(3), CarouselConfig::default(), armer(&live)));
    assert!(!carousel.is_armed());
    assert_eq!(live.get(), 0);
}

#[test]
fn zero_interval_falls_back_to_default() {
    let config = CarouselConfig::new(true, 0);
    assert_eq!(config.interval.get(), DEFAULT_INTERVAL_MS);
}

#[test]
fn projection_follows_focus() {
    let mut carousel: Carousel<FakeTimer> = Carousel::new(images(3), CarouselConfig::default());
    assert_eq!(carousel.track_transform(), "translateX(-0%)");
    carousel.jump_to(2).unwrap();
    assert_eq!(carousel.track_transform(), "translateX(-200%)");

    let active: Vec<usize> = carousel
        .indicators()
        .filter(|dot| dot.active)
        .map(|dot| dot.index)
        .collect();
    assert_eq!(active, vec![2]);
    assert_eq!(carousel.indicators().count(), 3);
}
