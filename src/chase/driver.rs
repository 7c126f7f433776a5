use super::state::{ChaseState, Direction};
use derive_more::{Display, From, Into};
use palette::Srgb;
use std::time::Duration;

/// Identifies one scheduled tick. A tick that arrives with a ticket other
/// than the pending one came from a timer that was already cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, Into)]
pub struct Ticket(u64);

/// Drawing and timer capabilities the driver needs from the UI toolkit.
pub trait Surface {
    type Task;

    fn reveal(&mut self, index: usize);
    fn hide(&mut self, index: usize);
    fn set_dot_color(&mut self, color: Srgb<u8>);
    fn set_background_color(&mut self, color: Srgb<u8>);

    /// Arranges for `Driver::on_tick(ticket)` to be delivered after `delay`.
    fn schedule(&mut self, delay: Duration, ticket: Ticket) -> Self::Task;

    /// Must be a no-op for a task that has already fired or been cancelled.
    fn cancel(&mut self, task: Self::Task);

    fn close(&mut self);
}

#[derive(Debug)]
pub struct ScheduledTask<T> {
    pub ticket: Ticket,
    pub task: T,
}

pub struct Driver<S: Surface> {
    state: ChaseState,
    surface: S,
    pending: Option<ScheduledTask<S::Task>>,
    next_ticket: u64,
}

impl<S: Surface> Driver<S> {
    pub fn new(state: ChaseState, mut surface: S) -> Self {
        surface.hide(state.hidden_index());
        Self {
            state,
            surface,
            pending: None,
            next_ticket: 0,
        }
    }

    pub fn start(&mut self) {
        if !self.state.is_running() || self.pending.is_some() {
            return;
        }

        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        let task = self.surface.schedule(self.state.tick_interval(), ticket);
        self.pending = Some(ScheduledTask { ticket, task });
    }

    pub fn on_tick(&mut self, ticket: Ticket) {
        if self.pending.as_ref().map(|p| p.ticket) != Some(ticket) {
            log::debug!("Ignoring stale tick {}", ticket);
            return;
        }
        self.pending = None;

        // pause() empties `pending`, so late ticks stop at the ticket check.
        // This catches a state that was paused without going through pause().
        if !self.state.is_running() {
            return;
        }

        let step = self.state.advance();
        self.surface.reveal(step.previous);
        self.surface.hide(step.current);

        self.start();
    }

    pub fn pause(&mut self) {
        self.state.pause();
        if let Some(pending) = self.pending.take() {
            self.surface.cancel(pending.task);
        }
    }

    pub fn resume(&mut self) {
        self.state.resume();
        self.start();
    }

    pub fn toggle_pause(&mut self) {
        if self.state.is_running() {
            self.pause();
            log::info!("Paused");
        } else {
            self.resume();
            log::info!("Resumed");
        }
    }

    pub fn toggle_direction(&mut self) -> Direction {
        self.state.toggle_direction()
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.state.set_direction(direction);
    }

    pub fn set_tick_interval(&mut self, ms: u64) -> u64 {
        self.state.set_tick_interval(ms)
    }

    pub fn set_dot_color(&mut self, color: Srgb<u8>) {
        self.surface.set_dot_color(color);
    }

    pub fn set_background_color(&mut self, color: Srgb<u8>) {
        self.surface.set_background_color(color);
    }

    pub fn shutdown(&mut self) {
        self.pause();
        self.surface.close();
    }

    pub fn state(&self) -> &ChaseState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn pending(&self) -> Option<&ScheduledTask<S::Task>> {
        self.pending.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chase::{Point, RingLayout};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Reveal(usize),
        Hide(usize),
        DotColor(Srgb<u8>),
        Background(Srgb<u8>),
        Schedule(Duration, Ticket),
        Cancel(u32),
        Close,
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
        next_task: u32,
    }

    impl Recorder {
        fn draws(&self) -> Vec<Call> {
            self.calls
                .iter()
                .filter(|c| matches!(c, Call::Reveal(_) | Call::Hide(_)))
                .cloned()
                .collect()
        }

        fn schedules(&self) -> usize {
            self.calls
                .iter()
                .filter(|c| matches!(c, Call::Schedule(..)))
                .count()
        }
    }

    impl Surface for Recorder {
        type Task = u32;

        fn reveal(&mut self, index: usize) {
            self.calls.push(Call::Reveal(index));
        }

        fn hide(&mut self, index: usize) {
            self.calls.push(Call::Hide(index));
        }

        fn set_dot_color(&mut self, color: Srgb<u8>) {
            self.calls.push(Call::DotColor(color));
        }

        fn set_background_color(&mut self, color: Srgb<u8>) {
            self.calls.push(Call::Background(color));
        }

        fn schedule(&mut self, delay: Duration, ticket: Ticket) -> u32 {
            self.calls.push(Call::Schedule(delay, ticket));
            self.next_task += 1;
            self.next_task
        }

        fn cancel(&mut self, task: u32) {
            self.calls.push(Call::Cancel(task));
        }

        fn close(&mut self) {
            self.calls.push(Call::Close);
        }
    }

    fn driver(dots: usize) -> Driver<Recorder> {
        let layout = RingLayout::new(dots, 240.0, Point::new(350.0, 350.0)).unwrap();
        Driver::new(ChaseState::new(&layout), Recorder::default())
    }

    fn fire(driver: &mut Driver<Recorder>) {
        let ticket = driver.pending().expect("a tick should be pending").ticket;
        driver.on_tick(ticket);
    }

    #[test]
    fn test_initial_gap_is_hidden() {
        let d = driver(12);
        assert_eq!(d.surface().calls, vec![Call::Hide(0)]);
        assert!(d.pending().is_none());
    }

    #[test]
    fn test_three_clockwise_ticks() {
        let mut d = driver(12);
        d.start();
        let mut seen = vec![d.state().hidden_index()];
        for _ in 0..3 {
            fire(&mut d);
            seen.push(d.state().hidden_index());
        }

        assert_eq!(seen, vec![0, 1, 2, 3]);
        assert_eq!(
            d.surface().draws(),
            vec![
                Call::Hide(0),
                Call::Reveal(0),
                Call::Hide(1),
                Call::Reveal(1),
                Call::Hide(2),
                Call::Reveal(2),
                Call::Hide(3),
            ]
        );
    }

    #[test]
    fn test_start_never_stacks_timers() {
        let mut d = driver(12);
        d.start();
        d.start();
        d.start();
        assert_eq!(d.surface().schedules(), 1);
    }

    #[test]
    fn test_each_tick_schedules_exactly_one_successor() {
        let mut d = driver(12);
        d.start();
        for _ in 0..5 {
            fire(&mut d);
        }
        assert_eq!(d.surface().schedules(), 6);
        assert!(d.pending().is_some());
    }

    #[test]
    fn test_late_tick_after_pause_is_rejected_by_ticket() {
        let mut d = driver(12);
        d.start();
        let ticket = d.pending().unwrap().ticket;
        d.pause();

        // the timer fired before the cancellation was observed
        d.on_tick(ticket);

        assert_eq!(d.state().hidden_index(), 0);
        assert_eq!(d.surface().draws(), vec![Call::Hide(0)]);
        assert!(d.pending().is_none());
    }

    #[test]
    fn test_paused_state_never_schedules() {
        let layout = RingLayout::new(12, 240.0, Point::new(350.0, 350.0)).unwrap();
        let mut state = ChaseState::new(&layout);
        state.pause();
        let mut d = Driver::new(state, Recorder::default());

        d.start();
        d.set_tick_interval(200);
        assert_eq!(d.surface().schedules(), 0);
        assert!(d.pending().is_none());

        d.resume();
        assert_eq!(d.surface().schedules(), 1);
        fire(&mut d);
        assert_eq!(d.state().hidden_index(), 1);
    }

    #[test]
    fn test_pause_before_first_tick_then_resume() {
        let mut d = driver(12);
        d.start();
        d.pause();
        assert!(d.surface().calls.contains(&Call::Cancel(1)));
        assert!(d.pending().is_none());
        assert_eq!(d.state().hidden_index(), 0);

        d.resume();
        assert_eq!(d.surface().schedules(), 2);
        assert!(d.pending().is_some());
        assert_eq!(d.surface().draws(), vec![Call::Hide(0)]);
    }

    #[test]
    fn test_stale_tick_after_resume_does_not_double_schedule() {
        let mut d = driver(12);
        d.start();
        let stale = d.pending().unwrap().ticket;
        d.pause();
        d.resume();
        let fresh = d.pending().unwrap().ticket;
        assert_ne!(stale, fresh);

        d.on_tick(stale);
        assert_eq!(d.state().hidden_index(), 0);
        assert_eq!(d.pending().unwrap().ticket, fresh);

        d.on_tick(fresh);
        assert_eq!(d.state().hidden_index(), 1);
        assert_eq!(d.surface().schedules(), 3);
    }

    #[test]
    fn test_resume_while_running_keeps_single_timer() {
        let mut d = driver(12);
        d.start();
        d.resume();
        assert_eq!(d.surface().schedules(), 1);
    }

    #[test]
    fn test_paused_driver_does_not_start() {
        let mut d = driver(12);
        d.pause();
        d.start();
        assert_eq!(d.surface().schedules(), 0);
    }

    #[test]
    fn test_interval_change_applies_to_next_schedule() {
        let mut d = driver(12);
        d.start();
        d.set_tick_interval(400);
        fire(&mut d);

        let delays: Vec<Duration> = d
            .surface()
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::Schedule(delay, _) => Some(*delay),
                _ => None,
            })
            .collect();
        assert_eq!(
            delays,
            vec![Duration::from_millis(90), Duration::from_millis(400)]
        );
    }

    #[test]
    fn test_direction_toggle_mid_run() {
        let mut d = driver(12);
        d.start();
        fire(&mut d);
        fire(&mut d);
        d.toggle_direction();
        fire(&mut d);
        assert_eq!(d.state().hidden_index(), 1);
        assert_eq!(d.surface().draws().last(), Some(&Call::Hide(1)));
    }

    #[test]
    fn test_toggle_pause() {
        let mut d = driver(12);
        d.start();
        d.toggle_pause();
        assert!(!d.state().is_running());
        assert!(d.pending().is_none());
        d.toggle_pause();
        assert!(d.state().is_running());
        assert!(d.pending().is_some());
    }

    #[test]
    fn test_colors_pass_through() {
        let mut d = driver(12);
        d.set_dot_color(Srgb::new(255, 107, 107));
        d.set_background_color(Srgb::new(0, 0, 0));
        assert_eq!(
            &d.surface().calls[1..],
            &[
                Call::DotColor(Srgb::new(255, 107, 107)),
                Call::Background(Srgb::new(0, 0, 0)),
            ]
        );
    }

    #[test]
    fn test_shutdown_cancels_and_closes() {
        let mut d = driver(12);
        d.start();
        d.shutdown();
        assert!(!d.state().is_running());
        assert!(d.pending().is_none());
        assert_eq!(&d.surface().calls[2..], &[Call::Cancel(1), Call::Close]);
    }

    #[test]
    fn test_gap_is_always_unique() {
        let mut d = driver(5);
        d.start();
        let mut hidden = vec![false; 5];
        hidden[0] = true;
        for _ in 0..23 {
            fire(&mut d);
            if let [.., Call::Reveal(r), Call::Hide(h)] = d.surface().draws().as_slice() {
                assert_ne!(r, h);
                hidden[*r] = false;
                hidden[*h] = true;
            }
            assert_eq!(hidden.iter().filter(|h| **h).count(), 1);
            assert!(hidden[d.state().hidden_index()]);
        }
    }
}
