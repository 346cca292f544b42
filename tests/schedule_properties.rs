use chrono::{Days, NaiveDate};
use gymdues::domain::cycle::{
    compute_next_due_date, cycles_covered_by_payment, next_due_date_for_cycles,
};
use gymdues::domain::member::{CycleAnchorMode, MemberBillingRecord};
use gymdues::domain::payment::PaymentEvent;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

const CASES: usize = 2_000;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
}

fn random_record(rng: &mut StdRng) -> MemberBillingRecord {
    let anchor = base_date() + Days::new(rng.gen_range(0..2_000));
    MemberBillingRecord::new(1, base_date(), rng.gen_range(1..=60))
        .with_last_due_date(anchor)
        .with_grace_days(rng.gen_range(0..=15))
}

#[test]
fn test_on_time_payments_advance_exactly_one_cycle() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..CASES {
        let record = random_record(&mut rng);
        let anchor = record.last_due_date.unwrap();
        let grace_limit = anchor + Days::new(u64::from(record.grace_days));
        let paid_on = grace_limit - Days::new(rng.gen_range(0..400));

        let next = compute_next_due_date(&record, &PaymentEvent::new(1, paid_on)).unwrap();
        assert_eq!(
            next,
            anchor + Days::new(u64::from(record.cycle_length_days))
        );
    }
}

#[test]
fn test_late_payments_land_on_first_due_date_after_payment() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..CASES {
        let record = random_record(&mut rng);
        let anchor = record.last_due_date.unwrap();
        let cycle = i64::from(record.cycle_length_days);
        let grace_limit = anchor + Days::new(u64::from(record.grace_days));
        let paid_on = grace_limit + Days::new(rng.gen_range(1..500));

        let next = compute_next_due_date(&record, &PaymentEvent::new(1, paid_on)).unwrap();
        let offset = (next - anchor).num_days();

        assert!(next > paid_on, "{next} is not after {paid_on}");
        assert_eq!(offset % cycle, 0, "{next} is off the anchor's schedule");
        // one cycle earlier would not be after the payment
        assert!(anchor + Days::new((offset - cycle) as u64) <= paid_on);
    }
}

#[test]
fn test_from_payment_depends_only_on_payment_and_cycle() {
    let mut rng = StdRng::seed_from_u64(13);

    for _ in 0..CASES {
        let cycle = rng.gen_range(1..=60);
        let paid_on = base_date() + Days::new(rng.gen_range(0..2_000));
        let payment = PaymentEvent::new(1, paid_on);

        let mut record = MemberBillingRecord::new(1, base_date(), cycle)
            .with_anchor_mode(CycleAnchorMode::FromPayment)
            .with_grace_days(rng.gen_range(0..=15));
        if rng.gen_bool(0.5) {
            record.last_due_date = Some(base_date() + Days::new(rng.gen_range(0..3_000)));
        }
        if rng.gen_bool(0.3) {
            record.enrollment_date = None;
        }

        assert_eq!(
            compute_next_due_date(&record, &payment).unwrap(),
            paid_on + Days::new(u64::from(cycle))
        );
    }
}

#[test]
fn test_lump_payment_equals_repeated_single_payments() {
    let mut rng = StdRng::seed_from_u64(17);

    for _ in 0..CASES {
        let mut record = random_record(&mut rng);
        let anchor = record.last_due_date.unwrap();
        let paid_on =
            anchor + Days::new(rng.gen_range(0..300)) - Days::new(rng.gen_range(0..100));
        let payment = PaymentEvent::new(1, paid_on);
        let cycles = cycles_covered_by_payment(
            Decimal::from(rng.gen_range(0..500u32)),
            Some(Decimal::from(50)),
        );

        let lump = next_due_date_for_cycles(&record, &payment, cycles).unwrap();
        for _ in 0..cycles {
            record.last_due_date = Some(compute_next_due_date(&record, &payment).unwrap());
        }

        assert_eq!(record.last_due_date, Some(lump));
        let grace_limit = anchor + Days::new(u64::from(record.grace_days));
        if paid_on > grace_limit {
            assert!(lump > paid_on);
        }
    }
}
