//! Every display scorer stays on the 0–10 scale whatever it is fed.

use proptest::prelude::*;

use vitalscore_core::models::questionnaire::{
    ActivityAmount, EatingHabits, MentalHealth, PhysicalActivity, SedentaryBehavior, SleepQuality,
};
use vitalscore_scoring::categories::{activity, eating, mental, sedentary, sleep};

fn in_range(score: f64) -> bool {
    (0.0..=10.0).contains(&score)
}

fn item() -> impl Strategy<Value = f64> {
    -10.0f64..50.0
}

fn amount() -> impl Strategy<Value = ActivityAmount> {
    prop_oneof![
        Just(ActivityAmount::Missing),
        (-100.0f64..5000.0).prop_map(ActivityAmount::Plain),
        (0.0f64..7.0, 0.0f64..300.0).prop_map(|(days, minutes)| ActivityAmount::Session { days, minutes }),
    ]
}

proptest! {
    #[test]
    fn eating_is_clamped(values in prop::array::uniform9(item())) {
        let eating = EatingHabits {
            cereals: values[0],
            pulses: values[1],
            vegetables: values[2],
            fruits: values[3],
            milk: values[4],
            non_veg: values[5],
            snacks: values[6],
            beverages: values[7],
            sweets: values[8],
        };
        prop_assert!(in_range(eating::score(&eating)));
    }

    #[test]
    fn activity_is_clamped(
        pt in (item(), -10.0f64..500.0, any::<bool>()),
        amounts in prop::array::uniform7(amount()),
    ) {
        let pa = PhysicalActivity {
            pt_frequency: pt.0,
            pt_duration: pt.1,
            participates_in_pt: pt.2,
            yoga: amounts[0],
            exercise: amounts[1],
            indoor_games: amounts[2],
            outdoor_games: amounts[3],
            play_after_school: amounts[4],
            cycling: amounts[5],
            walking: amounts[6],
        };
        prop_assert!(in_range(activity::score(&pa)));
    }

    #[test]
    fn sedentary_is_clamped(values in prop::array::uniform7(item())) {
        let sb = SedentaryBehavior {
            tv: values[0],
            mobile: values[1],
            school_reading: values[2],
            non_school_reading: values[3],
            indoor_games: values[4],
            outdoor_games: values[5],
            tuition: values[6],
        };
        prop_assert!(in_range(sedentary::score(&sb)));
    }

    #[test]
    fn mental_is_clamped(values in prop::array::uniform9(item()), bullied in any::<bool>()) {
        let mh = MentalHealth {
            body_perception: values[0],
            bullied,
            difficulty_walking: values[1],
            difficulty_running: values[2],
            difficulty_sports: values[3],
            difficulty_attention: values[4],
            forget_things: values[5],
            trouble_keeping_up: values[6],
            feel_lonely: values[7],
            want_eat_less: values[8],
            ..Default::default()
        };
        prop_assert!(in_range(mental::score(&mh)));
    }

    #[test]
    fn sleep_is_clamped(
        values in prop::array::uniform9(item()),
        bed in 0u32..24,
        wake in 0u32..24,
    ) {
        let sq = SleepQuality {
            bedtime: format!("{bed:02}:00"),
            wake_time: format!("{wake:02}:30"),
            difficulty_falling_asleep: values[0],
            wake_up_during_sleep: values[1],
            wake_up_from_noise: values[2],
            difficulty_getting_back_to_sleep: values[3],
            sleepiness_in_classes: values[4],
            headache: values[5],
            irritation: values[6],
            loss_of_interest: values[7],
            forgetfulness: values[8],
        };
        prop_assert!(in_range(sleep::score(&sq)));
    }
}
