pub mod apigateway;
