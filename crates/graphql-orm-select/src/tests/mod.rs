mod resolve_info_builder_tests;
mod shape_envelope_tests;
