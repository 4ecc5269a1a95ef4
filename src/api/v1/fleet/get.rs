use crate::catalog::{self, SeatFilter};
use crate::methods;
use serde_derive::{Deserialize, Serialize};
use warp::http::StatusCode;
use warp::{Filter, Reply};

#[derive(Deserialize, Serialize, Clone, Debug)]
struct FleetQuery {
    r#type: Option<String>,
    max_price: Option<i32>,
    seats: Option<String>,
}

// Public catalog listing behind the fleet page's filter sidebar.
pub fn get_fleet() -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!("get")
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<FleetQuery>())
        .and_then(async move |query: FleetQuery| {
            let seat_filter = match &query.seats {
                None => SeatFilter::Any,
                Some(raw) => match SeatFilter::parse(raw) {
                    Some(parsed) => parsed,
                    None => {
                        return methods::standard_replies::bad_request(
                            "Seats filter must be one of: Any, 5, 7+",
                        );
                    }
                },
            };
            let vehicles =
                catalog::filter_fleet(query.r#type.as_deref(), query.max_price, seat_filter);
            let msg = serde_json::json!({"vehicles": vehicles});
            Ok::<_, warp::Rejection>((warp::reply::with_status(
                warp::reply::json(&msg),
                StatusCode::OK,
            )
            .into_response(),))
        })
}
