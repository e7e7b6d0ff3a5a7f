mod directive_validation_tests;
