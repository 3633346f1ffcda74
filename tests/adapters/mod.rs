// Mock implementations for adapter layer testing

pub mod mock_transport;

pub use mock_transport::MockTransport;
