//! # card-service
//!
//! Application layer containing the order workflow, card publication logic,
//! access control, and DTOs.

pub mod dto;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;

pub use dto::{
    AuthResponse, CardResponse, CardWithOrderResponse, CreateCardRequest,
    CreateOrderRequest, HealthChecks, HealthResponse, LoginRequest, MarkCardCreatedRequest,
    OrderResponse, ReadinessResponse, RefreshTokenRequest, RegisterRequest,
    SetOrderStatusRequest, SlugAvailabilityResponse, UpdateCardRequest, UserResponse,
};
pub use services::{
    AccessGate, AuthService, CardService, OrderService, Resource, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, SlugAllocator, UserService,
};
