pub mod plan_testkit;
