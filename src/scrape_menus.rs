//! Weekly menu extraction from the canteen portal: the standard and reduced
//! price pages of a week are parsed independently, then reconciled.
use chrono::NaiveDate;

use crate::cache::{Store, WeekKey};
use crate::fetch::{Portal, Price};
use crate::menu::{reconcile, WeekMenu};
use crate::parse::MenuPage;

/// The lunch menu of the week containing `date`. Nothing is returned unless
/// both pages parse completely.
pub async fn extract_week_menu(portal: &Portal, date: NaiveDate) -> crate::Result<WeekMenu> {
    let standard = portal.menu_page(date, Price::Standard).await?;
    // dinner has to be there and parse, but it isn't kept
    let standard = MenuPage::parse(&standard, true)?;

    let reduced = portal.menu_page(date, Price::Reduced).await?;
    let reduced = MenuPage::parse(&reduced, false)?;

    Ok(reconcile(&standard.lunch, &reduced.lunch)?)
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    Extracted,
    AlreadyCached,
}

/// Extracts and stores the week containing `date` unless it is already
/// stored. A failed week leaves nothing behind and is retried next run.
pub async fn refresh_week(portal: &Portal, store: &Store, date: NaiveDate) -> crate::Result<Outcome> {
    let key = WeekKey::of(date);
    if !store.should_extract(key).await? {
        return Ok(Outcome::AlreadyCached);
    }
    let menu = extract_week_menu(portal, date).await?;
    store.save(key, &menu).await?;
    Ok(Outcome::Extracted)
}

#[cfg(test)]
mod tests {
    use std::{fs, time::Duration};

    use httpmock::prelude::*;

    use super::*;
    use crate::menu::Dish;
    use crate::{parse, Error};

    fn page(name: &str) -> String {
        fs::read_to_string(format!("./src/parse/html_examples/menu/{name}.html")).unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 16).unwrap()
    }

    async fn serve(server: &MockServer, standard: &str, reduced: &str) {
        server
            .mock_async(|when, then| {
                when.method(GET).path_contains("/0/1/2");
                then.status(200).body(standard);
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path_contains("/0/2/2");
                then.status(200).body(reduced);
            })
            .await;
    }

    fn portal(server: &MockServer) -> Portal {
        Portal::new(server.base_url().parse().unwrap(), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_extract_week_menu() {
        let server = MockServer::start_async().await;
        serve(&server, &page("standard"), &page("reduced")).await;
        let menu = extract_week_menu(&portal(&server), date()).await.unwrap();
        let days = menu.days();

        assert_eq!(
            days[0].first,
            vec![
                Dish::new("Pasta al pomodoro", false),
                Dish::new("Risotto ai funghi", true)
            ]
        );
        assert_eq!(
            days[0].second,
            vec![Dish::new("Pollo arrosto", false), Dish::new("Merluzzo", true)]
        );
        // the reduced page offers a dish the standard page doesn't have
        assert_eq!(days[2].first, vec![Dish::new("Gnocchi", false)]);
        assert_eq!(
            days[2].second,
            vec![Dish::new("Zuppa", true), Dish::new("Pollo", false)]
        );
        assert!(days[2].side.is_empty());
        assert_eq!(days[4].side, vec![Dish::new("Patate al forno", true)]);
        assert!(days
            .iter()
            .flat_map(|d| &d.side)
            .all(|dish| dish.in_reduced));
    }

    #[tokio::test]
    async fn test_standard_page_missing_dinner() {
        let server = MockServer::start_async().await;
        serve(&server, &page("reduced"), &page("reduced")).await;
        let err = extract_week_menu(&portal(&server), date())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Parse(parse::Error::WrongTableCount { expected: 2, found: 1 })
        ));
    }

    #[tokio::test]
    async fn test_malformed_dinner_aborts_week() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::local(dir.path()).await.unwrap();
        let server = MockServer::start_async().await;
        serve(&server, &page("broken_dinner"), &page("reduced")).await;
        let portal = portal(&server);

        let err = extract_week_menu(&portal, date()).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Parse(parse::Error::TitleMismatch { .. })
        ));
        assert!(refresh_week(&portal, &store, date()).await.is_err());
        assert!(store.should_extract(WeekKey::of(date())).await.unwrap());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_reduced_page_unavailable() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path_contains("/0/1/2");
                then.status(200).body(page("standard"));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path_contains("/0/2/2");
                then.status(503);
            })
            .await;
        let err = extract_week_menu(&portal(&server), date())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Status { .. }));
    }

    #[tokio::test]
    async fn test_refresh_week_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::local(dir.path()).await.unwrap();
        let server = MockServer::start_async().await;
        serve(&server, &page("standard"), &page("reduced")).await;
        let portal = portal(&server);

        let key = WeekKey::of(date());
        assert!(store.should_extract(key).await.unwrap());
        assert_eq!(
            refresh_week(&portal, &store, date()).await.unwrap(),
            Outcome::Extracted
        );
        assert!(!store.should_extract(key).await.unwrap());
        assert_eq!(
            refresh_week(&portal, &store, date()).await.unwrap(),
            Outcome::AlreadyCached
        );
        let stored = store.load(key).await.unwrap().unwrap();
        assert_eq!(stored.days()[1].first, vec![Dish::new("Lasagne", true)]);
    }

    #[tokio::test]
    async fn test_failed_week_is_retried() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::local(dir.path()).await.unwrap();
        let server = MockServer::start_async().await;
        serve(&server, &page("swapped"), &page("reduced")).await;

        assert!(refresh_week(&portal(&server), &store, date()).await.is_err());
        assert!(store.should_extract(WeekKey::of(date())).await.unwrap());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
