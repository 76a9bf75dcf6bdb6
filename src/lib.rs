pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod repository;
    }
}

pub mod modules {
    pub mod students {
        pub mod core {
            pub mod roster;
            pub mod student;
        }
        pub mod use_cases {
            pub mod import_students {
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_students {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
            }
            pub mod outbound {
                pub mod student_repository;
                pub mod students_in_memory;
            }
        }
    }

    pub mod classrooms {
        pub mod core {
            pub mod classroom;
        }
        pub mod use_cases {
            pub mod create_classroom {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_classrooms {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
            }
            pub mod outbound {
                pub mod classroom_repository;
                pub mod classrooms_in_memory;
            }
        }
    }

    pub mod exams {
        pub mod core {
            pub mod exam;
        }
        pub mod use_cases {
            pub mod create_exam {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_exams {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod register_year {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_registrations {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
            }
            pub mod outbound {
                pub mod exam_repository;
                pub mod exams_in_memory;
            }
        }
    }

    pub mod allocations {
        pub mod core {
            pub mod capacity;
            pub mod planner;
            pub mod seat;
            pub mod selection;
        }
        pub mod use_cases {
            pub mod allocate_seats {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod check_capacity {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_allocations {
                pub mod queries;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod seat_lookup {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod export_allocation {
                pub mod pdf;
                pub mod workbook;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod http;
            }
            pub mod outbound {
                pub mod allocation_repository;
                pub mod allocations_in_memory;
            }
        }
    }
}

pub mod shell;
