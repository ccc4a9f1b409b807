use chrono::{Duration, NaiveDate};
use rsvp_core::db::open_db_in_memory;
use rsvp_core::{
    today, DirectoryService, Event, RelationshipService, SqliteEventRepository,
    SqliteRelationRepository, SqliteUserRepository, User,
};
use rusqlite::Connection;

struct Fixture<'conn> {
    directory: DirectoryService<SqliteUserRepository<'conn>, SqliteEventRepository<'conn>>,
    relations: RelationshipService<SqliteRelationRepository<'conn>>,
}

impl<'conn> Fixture<'conn> {
    fn new(conn: &'conn Connection) -> Self {
        Self {
            directory: DirectoryService::new(
                SqliteUserRepository::try_new(conn).unwrap(),
                SqliteEventRepository::try_new(conn).unwrap(),
            ),
            relations: RelationshipService::new(SqliteRelationRepository::try_new(conn).unwrap()),
        }
    }

    /// Creates an event owned by `owner`, dated `offset_days` from `base`,
    /// and makes `attendee` attend it.
    fn attended(
        &self,
        owner: &User,
        attendee: &User,
        description: &str,
        base: NaiveDate,
        offset_days: i64,
    ) -> Event {
        let event = self
            .directory
            .create_event(owner, description, Some(base + Duration::days(offset_days)))
            .unwrap();
        self.relations.attend(attendee, &event).unwrap();
        event
    }
}

fn reference_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
}

#[test]
fn past_attended_events_returns_only_earlier_dates() {
    let conn = open_db_in_memory().unwrap();
    let fx = Fixture::new(&conn);
    let jen = fx.directory.create_user("jen").unwrap();
    let crystal = fx.directory.create_user("crystal").unwrap();
    let day = reference_day();

    let small = fx.attended(&crystal, &jen, "small meeting", day, -2);
    let family = fx.attended(&crystal, &jen, "family meeting", day, -6);
    fx.attended(&crystal, &jen, "soccer game", day, 1);

    let past = fx.relations.past_attended_events(&jen, day).unwrap();
    assert_eq!(past, vec![small, family]);
}

#[test]
fn upcoming_attended_events_returns_only_later_dates() {
    let conn = open_db_in_memory().unwrap();
    let fx = Fixture::new(&conn);
    let jen = fx.directory.create_user("jen").unwrap();
    let crystal = fx.directory.create_user("crystal").unwrap();
    let day = reference_day();

    let small = fx.attended(&crystal, &jen, "small meeting", day, 2);
    let family = fx.attended(&crystal, &jen, "family meeting", day, 6);
    fx.attended(&crystal, &jen, "soccer game", day, -1);

    let upcoming = fx.relations.upcoming_attended_events(&jen, day).unwrap();
    assert_eq!(upcoming, vec![small, family]);
}

#[test]
fn event_on_reference_day_is_in_neither_partition() {
    let conn = open_db_in_memory().unwrap();
    let fx = Fixture::new(&conn);
    let jen = fx.directory.create_user("jen").unwrap();
    let lana = fx.directory.create_user("lana").unwrap();
    let day = reference_day();

    let standup = fx.attended(&jen, &jen, "standup", day, 0);
    fx.relations.attend(&lana, &standup).unwrap();

    for user in [&jen, &lana] {
        assert!(fx.relations.past_attended_events(user, day).unwrap().is_empty());
        assert!(fx
            .relations
            .upcoming_attended_events(user, day)
            .unwrap()
            .is_empty());
        assert_eq!(fx.relations.attended_events(user).unwrap().len(), 1);
    }
}

#[test]
fn undated_attended_event_is_in_neither_partition() {
    let conn = open_db_in_memory().unwrap();
    let fx = Fixture::new(&conn);
    let jen = fx.directory.create_user("jen").unwrap();
    let party = fx.directory.create_event(&jen, "party", None).unwrap();

    assert!(fx.relations.past_attended_events_now(&jen).unwrap().is_empty());
    assert!(fx
        .relations
        .upcoming_attended_events_now(&jen)
        .unwrap()
        .is_empty());

    fx.relations.attend(&jen, &party).unwrap();

    assert!(fx.relations.past_attended_events_now(&jen).unwrap().is_empty());
    assert!(fx
        .relations
        .upcoming_attended_events_now(&jen)
        .unwrap()
        .is_empty());
    assert_eq!(fx.relations.attended_events(&jen).unwrap(), vec![party]);
}

#[test]
fn partitions_only_cover_attended_events() {
    let conn = open_db_in_memory().unwrap();
    let fx = Fixture::new(&conn);
    let jen = fx.directory.create_user("jen").unwrap();
    let lana = fx.directory.create_user("lana").unwrap();
    let day = reference_day();

    fx.attended(&jen, &lana, "lana only", day, -3);
    let invited_only = fx
        .directory
        .create_event(&jen, "invited only", Some(day + Duration::days(3)))
        .unwrap();
    fx.relations.invite(&lana, &jen, &invited_only).unwrap();

    assert!(fx.relations.past_attended_events(&jen, day).unwrap().is_empty());
    assert!(fx
        .relations
        .upcoming_attended_events(&jen, day)
        .unwrap()
        .is_empty());
}

#[test]
fn partitions_compare_across_month_and_year_boundaries() {
    let conn = open_db_in_memory().unwrap();
    let fx = Fixture::new(&conn);
    let jen = fx.directory.create_user("jen").unwrap();
    let day = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();

    let eve = fx.attended(&jen, &jen, "new year's eve", day, -1);
    let next_month = fx.attended(&jen, &jen, "february", day, 31);

    assert_eq!(fx.relations.past_attended_events(&jen, day).unwrap(), vec![eve]);
    assert_eq!(
        fx.relations.upcoming_attended_events(&jen, day).unwrap(),
        vec![next_month]
    );
}

#[test]
fn now_variants_use_current_local_date() {
    let conn = open_db_in_memory().unwrap();
    let fx = Fixture::new(&conn);
    let jen = fx.directory.create_user("jen").unwrap();
    let now = today();

    let yesterday = fx.attended(&jen, &jen, "yesterday", now, -1);
    let tomorrow = fx.attended(&jen, &jen, "tomorrow", now, 1);

    assert_eq!(
        fx.relations.past_attended_events_now(&jen).unwrap(),
        vec![yesterday]
    );
    assert_eq!(
        fx.relations.upcoming_attended_events_now(&jen).unwrap(),
        vec![tomorrow]
    );
}

#[test]
fn partitions_order_dates_beyond_four_digit_years() {
    let conn = open_db_in_memory().unwrap();
    let fx = Fixture::new(&conn);
    let jen = fx.directory.create_user("jen").unwrap();
    let day = reference_day();

    let far_future = fx
        .directory
        .create_event(&jen, "far future", NaiveDate::from_ymd_opt(10000, 1, 1))
        .unwrap();
    let far_past = fx
        .directory
        .create_event(&jen, "far past", NaiveDate::from_ymd_opt(-1, 6, 15))
        .unwrap();
    fx.relations.attend(&jen, &far_future).unwrap();
    fx.relations.attend(&jen, &far_past).unwrap();

    assert_eq!(
        fx.relations.upcoming_attended_events(&jen, day).unwrap(),
        vec![far_future.clone()]
    );
    assert_eq!(
        fx.relations.past_attended_events(&jen, day).unwrap(),
        vec![far_past.clone()]
    );

    let ancient_day = NaiveDate::from_ymd_opt(-5, 1, 1).unwrap();
    assert_eq!(
        fx.relations.upcoming_attended_events(&jen, ancient_day).unwrap(),
        vec![far_future, far_past]
    );
    assert!(fx
        .relations
        .past_attended_events(&jen, ancient_day)
        .unwrap()
        .is_empty());
}
