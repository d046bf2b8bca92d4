use std::sync::Arc;

use rocket::{response::status::Created, serde::json::Json, Route, State};

use crate::error::Result;
use crate::model::{Assignment, AssignmentSpec, Id};
use crate::registry::Registry;

pub fn routes() -> Vec<Route> {
    routes![
        get_assignments,
        get_assignments_for_voter,
        get_assignments_for_booth,
        create_assignment,
        delete_assignment,
    ]
}

#[get("/assignments")]
async fn get_assignments(registry: &State<Arc<Registry>>) -> Json<Vec<Assignment>> {
    Json(registry.assignments().await)
}

#[get("/assignments/voter/<voter_id>")]
async fn get_assignments_for_voter(
    voter_id: Id,
    registry: &State<Arc<Registry>>,
) -> Json<Vec<Assignment>> {
    Json(registry.assignments_for_voter(&voter_id).await)
}

#[get("/assignments/booth/<booth_id>")]
async fn get_assignments_for_booth(
    booth_id: Id,
    registry: &State<Arc<Registry>>,
) -> Json<Vec<Assignment>> {
    Json(registry.assignments_for_booth(&booth_id).await)
}

#[post("/assignments", data = "<spec>", format = "json")]
async fn create_assignment(
    spec: Json<AssignmentSpec>,
    registry: &State<Arc<Registry>>,
) -> Result<Created<Json<Assignment>>> {
    let assignment = registry.create_assignment(spec.0).await?;
    let location = format!("/api/assignments/{}", assignment.id);
    Ok(Created::new(location).body(Json(assignment)))
}

#[delete("/assignments/<id>")]
async fn delete_assignment(id: Id, registry: &State<Arc<Registry>>) -> Result<()> {
    registry.delete_assignment(&id).await
}

#[cfg(test)]
mod tests {
    use rocket::http::{ContentType, Status};
    use rocket::local::asynchronous::Client;
    use rocket::serde::json::serde_json;

    use crate::model::{Booth, BoothSpec, Officer, OfficerSpec, Voter, VoterSpec, VoterStatus};
    use crate::test_client;

    use super::*;

    struct Fixtures {
        voter: Voter,
        booth: Booth,
        officer: Officer,
    }

    async fn post_json<T: serde::Serialize>(client: &Client, path: &str, body: &T) -> String {
        let response = client
            .post(path)
            .header(ContentType::JSON)
            .body(serde_json::to_string(body).unwrap())
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Created);
        response.into_string().await.unwrap()
    }

    async fn setup(client: &Client) -> Fixtures {
        let voter = serde_json::from_str(
            &post_json(client, "/api/voters", &VoterSpec::example1()).await,
        )
        .unwrap();
        let booth = serde_json::from_str(
            &post_json(client, "/api/booths", &BoothSpec::example1()).await,
        )
        .unwrap();
        let officer = serde_json::from_str(
            &post_json(client, "/api/officers", &OfficerSpec::example1()).await,
        )
        .unwrap();
        Fixtures {
            voter,
            booth,
            officer,
        }
    }

    async fn get_booth(client: &Client, id: &Id) -> Booth {
        let response = client.get(format!("/api/booths/{id}")).dispatch().await;
        assert_eq!(response.status(), Status::Ok);
        serde_json::from_str(&response.into_string().await.unwrap()).unwrap()
    }

    #[rocket::async_test]
    async fn assign_vote_delete_scenario() {
        let client = test_client().await;
        let f = setup(&client).await;

        // Assign: the booth's assigned count becomes 1.
        let spec = AssignmentSpec {
            voter_id: f.voter.id.clone(),
            booth_id: f.booth.id.clone(),
            officer_id: f.officer.id.clone(),
        };
        let assignment: Assignment =
            serde_json::from_str(&post_json(&client, "/api/assignments", &spec).await).unwrap();
        assert_eq!(get_booth(&client, &f.booth.id).await.assigned_count, 1);

        // Vote: the booth's completed count becomes 1.
        let response = client
            .post(format!("/api/voters/{}/voted", f.voter.id))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);
        let voted: Voter = serde_json::from_str(&response.into_string().await.unwrap()).unwrap();
        assert_eq!(voted.status, VoterStatus::Voted);
        assert_eq!(get_booth(&client, &f.booth.id).await.completed_count, 1);

        // Delete the assignment: assigned count drops back to 0 while the
        // completed count stays at 1.
        let response = client
            .delete(format!("/api/assignments/{}", assignment.id))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);
        let booth = get_booth(&client, &f.booth.id).await;
        assert_eq!(booth.assigned_count, 0);
        assert_eq!(booth.completed_count, 1);
    }

    #[rocket::async_test]
    async fn assignment_with_unknown_reference_is_bad_request() {
        let client = test_client().await;
        let f = setup(&client).await;

        let spec = AssignmentSpec {
            voter_id: Id::from("v-missing"),
            booth_id: f.booth.id.clone(),
            officer_id: f.officer.id.clone(),
        };
        let response = client
            .post("/api/assignments")
            .header(ContentType::JSON)
            .body(serde_json::to_string(&spec).unwrap())
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::BadRequest);
        assert_eq!(get_booth(&client, &f.booth.id).await.assigned_count, 0);
    }

    #[rocket::async_test]
    async fn deleting_voter_cascades_over_http() {
        let client = test_client().await;
        let f = setup(&client).await;
        let spec = AssignmentSpec {
            voter_id: f.voter.id.clone(),
            booth_id: f.booth.id.clone(),
            officer_id: f.officer.id.clone(),
        };
        post_json(&client, "/api/assignments", &spec).await;

        let response = client
            .delete(format!("/api/voters/{}", f.voter.id))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);

        // The assignment is gone and the booth counter followed.
        let response = client.get("/api/assignments").dispatch().await;
        let assignments: Vec<Assignment> =
            serde_json::from_str(&response.into_string().await.unwrap()).unwrap();
        assert!(assignments.is_empty());
        assert_eq!(get_booth(&client, &f.booth.id).await.assigned_count, 0);
    }

    #[rocket::async_test]
    async fn assignment_lookups_filter_by_voter_and_booth() {
        let client = test_client().await;
        let f = setup(&client).await;
        let other_booth: Booth = serde_json::from_str(
            &post_json(&client, "/api/booths", &BoothSpec::example2()).await,
        )
        .unwrap();
        let spec = AssignmentSpec {
            voter_id: f.voter.id.clone(),
            booth_id: f.booth.id.clone(),
            officer_id: f.officer.id.clone(),
        };
        post_json(&client, "/api/assignments", &spec).await;

        let response = client
            .get(format!("/api/assignments/voter/{}", f.voter.id))
            .dispatch()
            .await;
        let by_voter: Vec<Assignment> =
            serde_json::from_str(&response.into_string().await.unwrap()).unwrap();
        assert_eq!(by_voter.len(), 1);

        let response = client
            .get(format!("/api/assignments/booth/{}", other_booth.id))
            .dispatch()
            .await;
        let by_booth: Vec<Assignment> =
            serde_json::from_str(&response.into_string().await.unwrap()).unwrap();
        assert!(by_booth.is_empty());
    }
}
