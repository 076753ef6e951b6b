pub mod request_writer;
pub mod response_reader;
