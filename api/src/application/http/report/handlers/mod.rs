pub mod generate_pdf;
