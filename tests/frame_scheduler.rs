mod common;

mod tests {
    use perimeter_lights::color::{OFF, WHITE};
    use perimeter_lights::{
        AnimationMode, CommandAction, CommandChannel, DisplayOutcome, Duty, Instant, PowerStatus,
    };

    use super::common::{RAW_FULL, RAW_LOW, TestScheduler, scheduler};

    fn ms(millis: u64) -> Instant {
        Instant::from_millis(millis)
    }

    /// Tick once per millisecond over `[from, to)` and collect the duties
    fn run(scheduler: &mut TestScheduler<'_>, from: u64, to: u64) -> Vec<Duty> {
        (from..to).map(|t| scheduler.tick(ms(t))).collect()
    }

    fn samples(duties: &[Duty]) -> Vec<perimeter_lights::SampleEffects> {
        duties
            .iter()
            .filter_map(|duty| match duty {
                Duty::Sample(effects) => Some(*effects),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_boot_drives_power_gate_low() {
        let channel = CommandChannel::<16>::new();
        let scheduler = scheduler(&[], channel.receiver());
        assert_eq!(scheduler.board().power_gate.history, vec![false]);
        assert_eq!(scheduler.state().power().status(), PowerStatus::Disabled);
        assert_eq!(scheduler.state().engine().mode(), AnimationMode::Startup);
    }

    #[test]
    fn test_duty_priority() {
        let channel = CommandChannel::<16>::new();
        let mut scheduler = scheduler(&[], channel.receiver());

        assert_eq!(scheduler.tick(ms(0)), Duty::Command(None));
        assert_eq!(scheduler.tick(ms(16)), Duty::Command(None));
        assert_eq!(
            scheduler.tick(Instant::from_micros(16_600)),
            Duty::Display(DisplayOutcome::PoweredOff)
        );

        // Both are due: display wins, sampling waits for the next iteration
        assert_eq!(
            scheduler.tick(ms(1000)),
            Duty::Display(DisplayOutcome::PoweredOff)
        );
        assert!(matches!(scheduler.tick(ms(1000)), Duty::Sample(_)));
        assert_eq!(scheduler.tick(ms(1000)), Duty::Command(None));
    }

    #[test]
    fn test_commands_wait_for_display() {
        let channel = CommandChannel::<16>::new();
        let mut scheduler = scheduler(&[], channel.receiver());
        channel.sender().send_str("12");

        assert_eq!(
            scheduler.tick(ms(17)),
            Duty::Display(DisplayOutcome::PoweredOff)
        );
        assert_eq!(channel.len(), 2);

        assert_eq!(
            scheduler.tick(ms(18)),
            Duty::Command(Some(CommandAction::Select(AnimationMode::AnimateLeft)))
        );
        assert_eq!(
            scheduler.tick(ms(19)),
            Duty::Command(Some(CommandAction::Select(AnimationMode::AnimateFront)))
        );
        assert_eq!(scheduler.tick(ms(20)), Duty::Command(None));
        assert_eq!(scheduler.console(), "animate left\nanimate front\n");
    }

    #[test]
    fn test_enabled_display_submits_frames() {
        let channel = CommandChannel::<16>::new();
        let mut scheduler = scheduler(&[], channel.receiver());
        channel.sender().try_send(b'e').unwrap();

        assert_eq!(
            scheduler.tick(ms(0)),
            Duty::Command(Some(CommandAction::ToggleEnabled))
        );
        assert_eq!(
            scheduler.tick(ms(17)),
            Duty::Display(DisplayOutcome::Submitted)
        );

        let board = scheduler.board();
        assert_eq!(board.leds.frames.len(), 1);
        assert_eq!(board.indicator.history, vec![true, false]);

        // Startup phase 0 on both channels, in physical order
        let frame = &board.leds.frames[0];
        assert_eq!(frame[0], WHITE);
        assert_eq!(frame[68], WHITE);
        assert_eq!(frame[1], OFF);
        assert_eq!(scheduler.state().engine().phase(), 1);
    }

    #[test]
    fn test_paused_animation_still_submits() {
        let channel = CommandChannel::<16>::new();
        let mut scheduler = scheduler(&[], channel.receiver());
        channel.sender().send_str("e ");

        run(&mut scheduler, 0, 2);
        assert!(!scheduler.state().engine().is_animating());

        assert_eq!(
            scheduler.tick(ms(17)),
            Duty::Display(DisplayOutcome::Submitted)
        );
        assert_eq!(scheduler.state().engine().phase(), 0);
        assert!(scheduler.board().leds.frames[0].iter().all(|pixel| *pixel == OFF));
    }

    #[test]
    fn test_busy_transmission_skips_frame() {
        let channel = CommandChannel::<16>::new();
        let mut scheduler = scheduler(&[], channel.receiver());
        channel.sender().try_send(b'e').unwrap();
        scheduler.tick(ms(0));

        scheduler.board().leds.busy.set(true);
        assert_eq!(scheduler.tick(ms(17)), Duty::Display(DisplayOutcome::Busy));
        assert!(scheduler.board().leds.frames.is_empty());
        assert_eq!(scheduler.state().engine().phase(), 0);

        // The tick was consumed; the next frame goes out on the next cadence
        scheduler.board().leds.busy.set(false);
        assert_eq!(scheduler.tick(ms(18)), Duty::Command(None));
        assert_eq!(
            scheduler.tick(ms(34)),
            Duty::Display(DisplayOutcome::Submitted)
        );
        assert_eq!(scheduler.board().leds.frames.len(), 1);
    }

    #[test]
    fn test_good_battery_enables_output() {
        let channel = CommandChannel::<16>::new();
        let mut scheduler = scheduler(&[RAW_FULL], channel.receiver());

        let duties = run(&mut scheduler, 0, 11_500);
        let samples = samples(&duties);
        assert_eq!(samples.len(), 11);
        assert!(samples[..10].iter().all(|effects| effects.transition.is_none()));
        assert_eq!(samples[10].transition, Some(PowerStatus::Enabled));

        assert_eq!(scheduler.state().power().voltage_count(), 4);
        assert!(scheduler.board().power_gate.is_high());

        let duties = run(&mut scheduler, 11_500, 11_600);
        assert!(duties.contains(&Duty::Display(DisplayOutcome::Submitted)));
    }

    #[test]
    fn test_low_battery_disables_after_six_samples() {
        let channel = CommandChannel::<16>::new();
        let mut scheduler = scheduler(&[RAW_LOW], channel.receiver());
        channel.sender().send_str("em");

        let duties = run(&mut scheduler, 0, 6_500);
        let samples = samples(&duties);
        assert_eq!(samples.len(), 6);
        assert!(samples[..5].iter().all(|effects| effects.transition.is_none()));
        assert_eq!(samples[5].transition, Some(PowerStatus::Disabled));
        assert!(samples[5].clear_lights);

        assert_eq!(scheduler.state().power().status(), PowerStatus::Disabled);
        assert_eq!(scheduler.state().power().voltage_count(), 0);
        assert!(!scheduler.board().power_gate.is_high());
        assert!(scheduler.console().ends_with("\r\nenabled: 0\n"));

        let duties = run(&mut scheduler, 6_500, 6_600);
        assert!(!duties.contains(&Duty::Display(DisplayOutcome::Submitted)));
    }
}
