use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{LoginDto, LoginResponse};
use crate::modules::customers::model::{Customer, CustomerDto};
use crate::modules::genres::model::{Genre, GenreDto};
use crate::modules::movies::model::{GenreSnapshot, Movie, MovieDto};
use crate::modules::rentals::model::{CustomerSnapshot, MovieSnapshot, Rental, RentalDto};
use crate::modules::returns::model::ReturnDto;
use crate::modules::users::model::{RegisterUserDto, User};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login,
        crate::modules::users::controller::register_user,
        crate::modules::users::controller::get_me,
        crate::modules::genres::controller::get_genres,
        crate::modules::genres::controller::get_genre,
        crate::modules::genres::controller::create_genre,
        crate::modules::genres::controller::update_genre,
        crate::modules::genres::controller::delete_genre,
        crate::modules::customers::controller::get_customers,
        crate::modules::customers::controller::get_customer,
        crate::modules::customers::controller::create_customer,
        crate::modules::customers::controller::update_customer,
        crate::modules::customers::controller::delete_customer,
        crate::modules::movies::controller::get_movies,
        crate::modules::movies::controller::get_movie,
        crate::modules::movies::controller::create_movie,
        crate::modules::movies::controller::update_movie,
        crate::modules::movies::controller::delete_movie,
        crate::modules::rentals::controller::get_rentals,
        crate::modules::rentals::controller::get_rental,
        crate::modules::rentals::controller::create_rental,
        crate::modules::returns::controller::create_return,
    ),
    components(
        schemas(
            User,
            RegisterUserDto,
            LoginDto,
            LoginResponse,
            ErrorResponse,
            Genre,
            GenreDto,
            Customer,
            CustomerDto,
            Movie,
            MovieDto,
            GenreSnapshot,
            Rental,
            RentalDto,
            CustomerSnapshot,
            MovieSnapshot,
            ReturnDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Credential exchange for identity tokens"),
        (name = "Users", description = "Registration and current-user lookup"),
        (name = "Genres", description = "Genre catalogue"),
        (name = "Customers", description = "Customer records"),
        (name = "Movies", description = "Movie catalogue"),
        (name = "Rentals", description = "Rental checkout and history"),
        (name = "Returns", description = "Rental-return workflow"),
    ),
    info(
        title = "Cinerent API",
        description = "Movie-rental REST API with JWT authentication",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
