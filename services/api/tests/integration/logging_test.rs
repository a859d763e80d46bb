use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::Registry;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use ecodatum_api::usecase::image::{CreateImageInput, UpdateImageInput};
use ecodatum_api::usecase::measurement::UpdateMeasurementInput;
use ecodatum_api::usecase::organization::UpdateOrganizationInput;
use ecodatum_api::usecase::site::UpdateSiteInput;
use ecodatum_api::usecase::user::UpdateUserInput;
use ecodatum_domain::abiotic_factor::AbioticFactorName;
use ecodatum_domain::image_type::ImageTypeName;
use ecodatum_domain::measurement_unit::MeasurementUnitName;

use crate::helpers::{create_chain, setup};

/// Collects the message of every event emitted while installed.
#[derive(Clone, Default)]
struct Messages(Arc<Mutex<Vec<String>>>);

impl Messages {
    fn contains(&self, message: &str) -> bool {
        self.0.lock().unwrap().iter().any(|m| m == message)
    }
}

impl<S: Subscriber> Layer<S> for Messages {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor(None);
        event.record(&mut visitor);
        if let Some(message) = visitor.0 {
            self.0.lock().unwrap().push(message);
        }
    }
}

struct MessageVisitor(Option<String>);

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.0 = Some(value.to_owned());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = Some(format!("{value:?}"));
        }
    }
}

#[tokio::test]
async fn should_log_every_update_and_delete() {
    let messages = Messages::default();
    let _guard = tracing::subscriber::set_default(Registry::default().with(messages.clone()));

    let (_, manager) = setup();
    let chain = create_chain(&manager).await;
    let measurement = manager
        .create_measurement_by_name(
            &chain.owner,
            &chain.survey,
            12.0,
            AbioticFactorName::Water,
            MeasurementUnitName::TemperatureCelsius,
        )
        .await
        .unwrap();
    let note = manager
        .create_note(&chain.owner, &chain.survey, "overcast".to_owned())
        .await
        .unwrap();
    let image = manager
        .create_image_by_name(
            &chain.owner,
            &chain.survey,
            ImageTypeName::Jpeg,
            CreateImageInput {
                base64_encoded: "/9j/4AAQ".to_owned(),
                description: None,
            },
        )
        .await
        .unwrap();

    manager
        .update_user(
            chain.owner.id,
            UpdateUserInput {
                name: Some("Owner".to_owned()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    manager
        .update_organization(
            chain.organization.id,
            UpdateOrganizationInput {
                description: Some("estuary".to_owned()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    manager
        .update_site(
            chain.site.id,
            UpdateSiteInput {
                altitude: Some(20.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    manager.update_survey(chain.survey.id, None).await.unwrap();
    manager
        .update_measurement(
            measurement.id,
            UpdateMeasurementInput {
                value: Some(12.5),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    manager
        .update_note(note.id, Some("rain".to_owned()))
        .await
        .unwrap();
    manager
        .update_image(
            image.id,
            UpdateImageInput {
                description: Some("bank".to_owned()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    manager.delete_measurement(measurement.id).await.unwrap();
    manager.delete_note(note.id).await.unwrap();
    manager.delete_image(image.id).await.unwrap();

    for expected in [
        "user updated",
        "organization updated",
        "site updated",
        "survey updated",
        "measurement updated",
        "note updated",
        "image updated",
        "measurement deleted",
        "note deleted",
        "image deleted",
    ] {
        assert!(messages.contains(expected), "no `{expected}` event");
    }
}
